//! Invocation of the external compression executables.

use std::ffi::OsStr;
use tokio::process::Command;
use tracing::debug;

use crate::utils::{ShrinkerError, ShrinkerResult};

/// Run one external tool to completion.
///
/// The binary is resolved on PATH first so a missing tool surfaces as a
/// spawn failure rather than a bare OS error. A non-zero exit becomes a tool
/// invocation error carrying the tool's stderr; the caller logs it and maps
/// it to the fixed user-facing message.
pub async fn run_tool<I, S>(program: &str, args: I) -> ShrinkerResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = which::which(program)
        .map_err(|e| ShrinkerError::tool(format!("{} not found: {}", program, e)))?;
    debug!("Running {}", binary.display());

    let output = Command::new(&binary)
        .args(args)
        .output()
        .await
        .map_err(|e| ShrinkerError::tool(format!("Failed to run {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ShrinkerError::tool(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}
