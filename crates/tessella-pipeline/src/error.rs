//! Error types for tessella-pipeline

use std::fmt;
use thiserror::Error;

/// Stage of the per-image run delegated to a collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resize to the working resolution
    Resize,
    /// Seed mask for the boundary search
    Seed,
    /// Convex-hull filling of the foreground mask
    Hull,
    /// Enhancement of the hull-filtered raster
    Enhance,
    /// Clustering into `K` labels
    Cluster,
    /// Rendering or export of the result
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resize => "resize",
            Stage::Seed => "seed",
            Stage::Hull => "hull",
            Stage::Enhance => "enhance",
            Stage::Cluster => "cluster",
            Stage::Render => "render",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during a per-image run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tessella_core::Error),

    /// Thresholding or cluster-count error
    #[error("color error: {0}")]
    Color(#[from] tessella_color::ColorError),

    /// Boundary, packing or assembly error
    #[error("region error: {0}")]
    Region(#[from] tessella_region::RegionError),

    /// A collaborator reported a failure
    #[error("{stage} stage failed: {message}")]
    Collaborator {
        /// Stage that failed
        stage: Stage,
        /// Collaborator's description of the failure
        message: String,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl PipelineError {
    /// Build a [`PipelineError::Collaborator`] for `stage`.
    pub fn collaborator(stage: Stage, message: impl Into<String>) -> Self {
        PipelineError::Collaborator {
            stage,
            message: message.into(),
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
