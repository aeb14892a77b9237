use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("This GCC embed plugin is for version {expected} (host is {found})")]
    VersionMismatch { expected: String, found: String },

    #[error("failed to write plugin output: {0}")]
    Io(#[from] io::Error),
}

impl PluginError {
    /// Status the host should report for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            PluginError::VersionMismatch { .. } | PluginError::Io(_) => 1,
        }
    }
}
