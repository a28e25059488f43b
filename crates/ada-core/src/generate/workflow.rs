//! GitHub Actions CI workflow generation

use crate::error::ScaffoldResult;
use crate::features::FeatureSelection;
use serde::{Serialize, Serializer};

/// Output path of the workflow, relative to the project root
pub const WORKFLOW_PATH: &str = ".github/workflows/ci.yml";

#[derive(Debug, Clone, Serialize)]
pub struct Workflow {
    pub name: String,
    pub on: Triggers,
    pub concurrency: Concurrency,
    #[serde(serialize_with = "ordered_map")]
    pub jobs: Vec<(String, Job)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Triggers {
    pub push: BranchFilter,
    pub pull_request: BranchFilter,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchFilter {
    pub branches: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Concurrency {
    pub group: String,
    #[serde(rename = "cancel-in-progress")]
    pub cancel_in_progress: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub name: String,
    #[serde(rename = "runs-on")]
    pub runs_on: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub needs: Vec<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(
        rename = "with",
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "ordered_map"
    )]
    pub inputs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
}

/// Serialize key/value pairs as a mapping in insertion order
fn ordered_map<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

impl Step {
    fn uses(action: &str) -> Self {
        Self {
            uses: Some(action.to_string()),
            ..Default::default()
        }
    }

    fn run(name: &str, command: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            run: Some(command.to_string()),
            ..Default::default()
        }
    }

    fn with(mut self, key: &str, value: &str) -> Self {
        self.inputs.push((key.to_string(), value.to_string()));
        self
    }
}

/// Checkout, Bun toolchain, dependency cache and install
fn setup_steps() -> Vec<Step> {
    let cache = Step {
        name: Some("Cache dependencies".into()),
        ..Step::uses("actions/cache@v4")
    }
    .with("path", "~/.bun/install/cache")
    .with("key", "${{ runner.os }}-bun-${{ hashFiles('**/bun.lockb') }}")
    .with("restore-keys", "${{ runner.os }}-bun-\n");

    vec![
        Step::uses("actions/checkout@v4"),
        Step::uses("oven-sh/setup-bun@v2").with("bun-version", "latest"),
        cache,
        Step::run("Install dependencies", "bun install --frozen-lockfile"),
    ]
}

fn job(name: &str, needs: &[&str], steps: Vec<Step>) -> Job {
    let mut all_steps = setup_steps();
    all_steps.extend(steps);

    Job {
        name: name.to_string(),
        runs_on: "ubuntu-latest".to_string(),
        needs: needs.iter().map(|n| n.to_string()).collect(),
        condition: None,
        steps: all_steps,
    }
}

const BUNDLE_REPORT: &str = r###"echo "## Bundle Size Report" >> $GITHUB_STEP_SUMMARY
echo "" >> $GITHUB_STEP_SUMMARY
echo "```" >> $GITHUB_STEP_SUMMARY
grep -E "\.js|\.css" build-output.txt | head -20 >> $GITHUB_STEP_SUMMARY || echo "No bundle info found" >> $GITHUB_STEP_SUMMARY
echo "```" >> $GITHUB_STEP_SUMMARY
"###;

impl Workflow {
    /// Build the CI pipeline for a selection; test jobs appear only when testing is enabled
    pub fn for_features(features: &FeatureSelection, branch: &str) -> Self {
        let has_unit = features.testing.has_unit();
        let has_e2e = features.testing.has_e2e();

        let mut jobs = vec![
            (
                "lint".to_string(),
                job(
                    "Lint & Format",
                    &[],
                    vec![
                        Step::run("Lint", "bun lint"),
                        Step::run("Format check", "bun format --check"),
                    ],
                ),
            ),
            (
                "typecheck".to_string(),
                job("Type Check", &[], vec![Step::run("Type check", "bun typecheck")]),
            ),
        ];

        if has_unit {
            jobs.push((
                "test".to_string(),
                job(
                    "Unit Tests",
                    &["lint", "typecheck"],
                    vec![Step::run("Run tests", "bun test")],
                ),
            ));
        }

        if has_e2e {
            jobs.push((
                "test-e2e".to_string(),
                job(
                    "E2E Tests",
                    &["lint", "typecheck"],
                    vec![
                        Step::run(
                            "Install Playwright browsers",
                            "bunx playwright install --with-deps chromium",
                        ),
                        Step::run("Run E2E tests", "bun test:e2e"),
                    ],
                ),
            ));
        }

        let build_needs: &[&str] = match (has_unit, has_e2e) {
            (_, true) => &["test", "test-e2e"],
            (true, false) => &["test"],
            (false, false) => &["lint", "typecheck"],
        };

        let upload = Step {
            name: Some("Upload build artifacts".into()),
            ..Step::uses("actions/upload-artifact@v4")
        }
        .with("name", "build-output")
        .with("path", ".output/")
        .with("retention-days", "7");

        jobs.push((
            "build".to_string(),
            job(
                "Build",
                build_needs,
                vec![Step::run("Build", "bun run build"), upload],
            ),
        ));

        let mut analysis = job(
            "Bundle Analysis",
            &["build"],
            vec![
                Step::run(
                    "Build and analyze",
                    "bun run build 2>&1 | tee build-output.txt",
                ),
                Step {
                    id: Some("bundle".into()),
                    ..Step::run("Extract bundle sizes", BUNDLE_REPORT)
                },
            ],
        );
        analysis.condition = Some("github.event_name == 'pull_request'".to_string());
        jobs.push(("bundle-analysis".to_string(), analysis));

        let branches = vec![branch.to_string()];
        Self {
            name: "CI".to_string(),
            on: Triggers {
                push: BranchFilter {
                    branches: branches.clone(),
                },
                pull_request: BranchFilter { branches },
            },
            concurrency: Concurrency {
                group: "${{ github.workflow }}-${{ github.ref }}".to_string(),
                cancel_in_progress: true,
            },
            jobs,
        }
    }

    pub fn to_yaml(&self) -> ScaffoldResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::TestingOption;
    use serde_yaml::Value;

    fn parsed(testing: TestingOption) -> Value {
        let features = FeatureSelection {
            testing,
            github_actions: true,
            ..FeatureSelection::none()
        };
        let yaml = Workflow::for_features(&features, "main").to_yaml().unwrap();
        serde_yaml::from_str(&yaml).unwrap()
    }

    fn job_names(workflow: &Value) -> Vec<String> {
        workflow["jobs"]
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect()
    }

    fn needs(workflow: &Value, job: &str) -> Vec<String> {
        workflow["jobs"][job]["needs"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|n| n.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_without_tests() {
        let workflow = parsed(TestingOption::None);
        assert_eq!(
            job_names(&workflow),
            ["lint", "typecheck", "build", "bundle-analysis"]
        );
        assert_eq!(needs(&workflow, "build"), ["lint", "typecheck"]);
        assert!(workflow["jobs"]["lint"].get("needs").is_none());
    }

    #[test]
    fn test_unit_only() {
        let workflow = parsed(TestingOption::Unit);
        assert_eq!(
            job_names(&workflow),
            ["lint", "typecheck", "test", "build", "bundle-analysis"]
        );
        assert_eq!(needs(&workflow, "test"), ["lint", "typecheck"]);
        assert_eq!(needs(&workflow, "build"), ["test"]);
    }

    #[test]
    fn test_unit_and_e2e() {
        let workflow = parsed(TestingOption::UnitE2e);
        assert_eq!(needs(&workflow, "test-e2e"), ["lint", "typecheck"]);
        assert_eq!(needs(&workflow, "build"), ["test", "test-e2e"]);
    }

    #[test]
    fn test_triggers_and_bundle_analysis() {
        let workflow = parsed(TestingOption::None);
        assert_eq!(workflow["name"].as_str(), Some("CI"));
        assert_eq!(workflow["on"]["push"]["branches"][0].as_str(), Some("main"));
        assert_eq!(
            workflow["on"]["pull_request"]["branches"][0].as_str(),
            Some("main")
        );
        assert_eq!(
            workflow["concurrency"]["cancel-in-progress"].as_bool(),
            Some(true)
        );

        let analysis = &workflow["jobs"]["bundle-analysis"];
        assert_eq!(needs(&workflow, "bundle-analysis"), ["build"]);
        assert_eq!(
            analysis["if"].as_str(),
            Some("github.event_name == 'pull_request'")
        );
    }

    #[test]
    fn test_setup_steps_keep_input_order() {
        let workflow = parsed(TestingOption::None);
        let cache = &workflow["jobs"]["lint"]["steps"][2];
        assert_eq!(cache["uses"].as_str(), Some("actions/cache@v4"));
        let keys: Vec<&str> = cache["with"]
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap())
            .collect();
        assert_eq!(keys, ["path", "key", "restore-keys"]);
    }
}
