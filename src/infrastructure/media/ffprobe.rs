use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use super::MediaProber;
use super::command::run_tool;
use crate::common::error::PipelineError;

#[derive(Debug, Deserialize)]
struct ProbeReport {
    format: ProbeFormat,
}

/// Container-level fields of an ffprobe `-show_format` report.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProbeFormat {
    pub format_name: String,
    #[serde(default)]
    pub format_long_name: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub bit_rate: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl ProbeFormat {
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.as_deref()?.parse().ok()
    }

    pub fn bit_rate_bps(&self) -> Option<u64> {
        self.bit_rate.as_deref()?.parse().ok()
    }
}

pub fn parse_probe_output(stdout: &[u8]) -> Result<ProbeFormat, serde_json::Error> {
    serde_json::from_slice::<ProbeReport>(stdout).map(|r| r.format)
}

pub fn probe_args(path: &Path) -> Vec<std::ffi::OsString> {
    vec![
        "-v".into(),
        "quiet".into(),
        "-print_format".into(),
        "json".into(),
        "-show_format".into(),
        path.into(),
    ]
}

pub struct FfprobeProber {
    binary: PathBuf,
    timeout: Duration,
}

impl FfprobeProber {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    async fn probe(&self, path: &Path) -> Result<ProbeFormat, PipelineError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(probe_args(path));

        let output = run_tool(cmd, self.timeout)
            .await
            .map_err(|e| e.into_pipeline(PipelineError::Validation))?;

        let format = parse_probe_output(&output.stdout).map_err(|e| {
            PipelineError::Validation(format!("unreadable probe output for {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            format = %format.format_name,
            duration = ?format.duration_secs(),
            bit_rate = ?format.bit_rate_bps(),
            "Probed"
        );
        Ok(format)
    }
}
