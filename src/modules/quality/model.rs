use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Unknown,
}

impl QualityTier {
    pub fn from_bitrate(bitrate: Option<&str>) -> Self {
        match bitrate {
            Some("64k") => QualityTier::Low,
            Some("128k") => QualityTier::Medium,
            Some("192k") => QualityTier::High,
            _ => QualityTier::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
            QualityTier::Unknown => "unknown",
        }
    }
}
