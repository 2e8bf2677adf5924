//! External tool invocation.

use std::path::Path;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Runs `tool` with `args` in `dir`, streaming its output to the
/// terminal.
///
/// A nonzero exit is a hard failure for the calling stage; the error
/// carries the tool name and exit status.
pub async fn run_tool(dir: &Path, tool: &str, args: &[String]) -> Result<()> {
    log::info!("Running {} {}", tool, args.join(" "));

    let status = Command::new(tool)
        .args(args)
        .current_dir(dir)
        .status()
        .await
        .map_err(|error| Error::ToolLaunch {
            tool: tool.to_string(),
            error,
        })?;

    if !status.success() {
        return Err(Error::ExternalTool {
            tool: tool.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_tool_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_tool(dir.path(), "mkpkg-no-such-tool", &[]).await;
        assert!(matches!(result, Err(Error::ToolLaunch { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_an_external_tool_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_tool(dir.path(), "false", &[]).await;
        match result {
            Err(Error::ExternalTool { tool, status }) => {
                assert_eq!(tool, "false");
                assert!(!status.success());
            }
            other => panic!("expected ExternalTool error, got {:?}", other.err()),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_exit_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        run_tool(dir.path(), "true", &[]).await.unwrap();
    }
}
