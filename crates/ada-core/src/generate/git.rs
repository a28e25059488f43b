//! Git repository initialization for the generated project

use crate::error::{ScaffoldError, ScaffoldResult};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::{debug, warn};

async fn git(dir: &Path, args: &[&str]) -> ScaffoldResult<Option<()>> {
    let status = TokioCommand::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => Ok(Some(())),
        Ok(status) => Err(ScaffoldError::Git {
            command: args.join(" "),
            code: status.code().unwrap_or(-1),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ScaffoldError::io(dir, e)),
    }
}

/// Run `git init` and rename the initial branch.
/// Returns `Ok(false)` when git is not installed.
pub async fn init_git_repository(dir: &Path, branch: &str) -> ScaffoldResult<bool> {
    if git(dir, &["init"]).await?.is_none() {
        warn!("git not found, skipping repository initialization");
        return Ok(false);
    }

    git(dir, &["branch", "-M", branch]).await?;
    debug!(dir = %dir.display(), branch, "initialized git repository");
    Ok(true)
}
