use thiserror::Error;

use crate::plan::PlanError;

/// Construction and resize-time failures.
///
/// Steady-state per-tick rendering cannot fail short of resource
/// exhaustion, which is treated as fatal by the frontend.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("shader compilation failed in `{stage}` stage: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("program link failed in `{stage}` stage: {log}")]
    ProgramLink { stage: &'static str, log: String },

    #[error("failed to load asset `{path}`: {source}")]
    AssetLoad {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid stage graph: {0}")]
    InvalidStageGraph(#[from] PlanError),
}
