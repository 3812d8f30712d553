use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

/// What a scratch file is used for. Each role maps to one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingRole {
    Source,
    EncodedOutput,
    ValidationCandidate(String),
}

impl StagingRole {
    pub fn file_name(&self) -> String {
        match self {
            StagingRole::Source => "input.mp3".to_string(),
            StagingRole::EncodedOutput => "output.mp3".to_string(),
            StagingRole::ValidationCandidate(bitrate) => {
                format!("validate_{}.mp3", sanitize(bitrate))
            }
        }
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Scratch directory owned by one invocation.
///
/// Every invocation gets its own `<root>/<label>-<uuid>` directory, so
/// concurrent jobs never share role paths. Callers finish with [`close`] or
/// [`release_all`]; an area dropped without either is removed synchronously.
///
/// [`close`]: StagingArea::close
/// [`release_all`]: StagingArea::release_all
pub struct StagingArea {
    dir: PathBuf,
    allocated: Vec<PathBuf>,
    closed: bool,
}

impl StagingArea {
    pub async fn allocate(root: &Path, label: &str) -> io::Result<Self> {
        let dir = root.join(format!("{}-{}", label, Uuid::new_v4().simple()));
        tokio::fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), "Allocated staging area");

        Ok(Self {
            dir,
            allocated: Vec::new(),
            closed: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path bound to `role`, registering it for cleanup.
    pub fn path(&mut self, role: &StagingRole) -> PathBuf {
        let path = self.dir.join(role.file_name());
        if !self.allocated.contains(&path) {
            self.allocated.push(path.clone());
        }
        path
    }

    pub fn allocated(&self) -> &[PathBuf] {
        &self.allocated
    }

    /// Deletes each path that exists and returns how many were removed.
    ///
    /// Missing files are skipped. Other failures are logged and never returned.
    pub async fn release(&self, paths: &[PathBuf]) -> usize {
        let mut removed = 0;
        for path in paths {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed staged file");
                    removed += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), "Error cleaning up staged file: {}", e),
            }
        }
        removed
    }

    /// Releases every registered path, then removes the directory itself.
    pub async fn release_all(&mut self) -> usize {
        let removed = self.release(&self.allocated).await;
        self.remove_dir().await;
        removed
    }

    /// Removes the directory and anything still in it.
    pub async fn close(mut self) {
        self.remove_dir().await;
    }

    async fn remove_dir(&mut self) {
        if self.closed {
            return;
        }
        match tokio::fs::remove_dir_all(&self.dir).await {
            Ok(()) => debug!(dir = %self.dir.display(), "Removed staging area"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(dir = %self.dir.display(), "Error removing staging area: {}", e);
                return;
            }
        }
        self.closed = true;
    }
}

impl Drop for StagingArea {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(dir = %self.dir.display(), "Error removing staging area: {}", e);
            }
        }
    }
}
