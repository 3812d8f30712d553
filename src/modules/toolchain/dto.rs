use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainReport {
    pub status_code: u16,
    pub body: ToolchainBody,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ToolchainBody {
    Available {
        message: String,
        ffmpeg_version: String,
        ffprobe_version: String,
        ffmpeg_path: String,
        ffprobe_path: String,
    },
    Unavailable {
        message: String,
        error: String,
    },
}
