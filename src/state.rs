use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::media::{AudioEncoder, FfmpegEncoder, FfprobeProber, MediaProber};
use crate::infrastructure::storage::{ObjectStore, StorageGateway};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageGateway,
    pub encoder: Arc<dyn AudioEncoder>,
    pub prober: Arc<dyn MediaProber>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: StorageGateway,
        encoder: Arc<dyn AudioEncoder>,
        prober: Arc<dyn MediaProber>,
    ) -> Self {
        Self {
            config,
            storage,
            encoder,
            prober,
        }
    }

    /// Wires the ffmpeg/ffprobe binaries named in `config` against `store`.
    pub fn from_config(config: AppConfig, store: Arc<dyn ObjectStore>) -> Self {
        let timeout = config.tool_timeout();
        let encoder = Arc::new(FfmpegEncoder::new(&config.ffmpeg_path, timeout));
        let prober = Arc::new(FfprobeProber::new(&config.ffprobe_path, timeout));

        Self::new(config, StorageGateway::new(store), encoder, prober)
    }
}
