use serde_json::Value;
use tracing::debug;

use super::model::QualityTier;
use crate::common::error::PipelineError;

pub struct QualityService;

impl QualityService {
    /// Adds a top-level `quality` field derived from `output.bitrate`.
    pub fn label(mut event: Value) -> Result<Value, PipelineError> {
        let bitrate = event
            .get("output")
            .and_then(|o| o.get("bitrate"))
            .and_then(Value::as_str);
        let tier = QualityTier::from_bitrate(bitrate);
        debug!(bitrate = ?bitrate, quality = tier.as_str(), "Labelled output");

        let object = event
            .as_object_mut()
            .ok_or_else(|| PipelineError::Input("event must be a JSON object".to_string()))?;
        object.insert("quality".to_string(), Value::from(tier.as_str()));

        Ok(event)
    }
}
