use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layer width (number of nodes) used as threshold to decide which build
/// path to use. Narrower layers are hashed on the calling thread, wider ones
/// are split into chunks hashed by the rayon pool.
pub const PARALLEL_LAYER_THRESHOLD: usize = 1024;

/// Number of nodes each rayon task hashes during the `build` stage.
pub const BUILD_CHUNK_NODES: usize = 1024 * 4;

/// Tree construction settings.
///
/// The settings only affect how layers are computed, never their content:
/// every config yields the same tree for the same leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Minimum layer width hashed in parallel.
    pub parallel_threshold: usize,

    /// Nodes per parallel task, must be even and non-zero.
    pub chunk_nodes: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            parallel_threshold: PARALLEL_LAYER_THRESHOLD,
            chunk_nodes: BUILD_CHUNK_NODES,
        }
    }
}

impl BuildConfig {
    /// Config that never uses the rayon pool.
    pub fn sequential() -> Self {
        BuildConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }

    /// Sets the minimum layer width hashed in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the number of nodes hashed per parallel task.
    pub fn with_chunk_nodes(mut self, chunk_nodes: usize) -> Self {
        self.chunk_nodes = chunk_nodes;
        self
    }

    /// Checks that chunks never split a sibling pair.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_nodes == 0 || self.chunk_nodes % 2 != 0 {
            return Err(Error::InvalidConfig(format!(
                "chunk_nodes must be even and non-zero, got {}",
                self.chunk_nodes
            )));
        }
        Ok(())
    }

    pub(crate) fn is_parallel(&self, width: usize) -> bool {
        width >= self.parallel_threshold
    }
}
