use std::io;
use std::process::Output;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, error};

use crate::common::error::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{tool} timed out after {limit:?}")]
    Timeout { tool: String, limit: Duration },
    #[error("{tool} exited with code {code:?}: {stderr}")]
    Failed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl ToolError {
    /// Timeouts keep their own kind; everything else becomes `wrap(message)`.
    pub fn into_pipeline(self, wrap: fn(String) -> PipelineError) -> PipelineError {
        match self {
            ToolError::Timeout { tool, limit } => PipelineError::Timeout { tool, limit },
            other => wrap(other.to_string()),
        }
    }
}

/// Runs `cmd` to completion, killing it if it outlives `timeout`.
pub async fn run_tool(mut cmd: Command, timeout: Duration) -> Result<Output, ToolError> {
    let tool = cmd.as_std().get_program().to_string_lossy().into_owned();
    debug!(?cmd, ?timeout, "Executing external tool");

    cmd.kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            error!(tool = %tool, "Failed to execute: {}", source);
            return Err(ToolError::Spawn { tool, source });
        }
        Err(_) => {
            error!(tool = %tool, ?timeout, "Timed out, process killed");
            return Err(ToolError::Timeout {
                tool,
                limit: timeout,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!(tool = %tool, code = ?output.status.code(), "Command failed: {}", stderr);
        return Err(ToolError::Failed {
            tool,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(output)
}
