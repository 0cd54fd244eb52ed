pub mod compositor;
pub mod config;
pub mod error;
pub mod pipeline;

pub use compositor::{dark_variants, effective_tokens};
pub use config::{AssemblerKind, ExportConfig};
pub use error::PipelineError;
pub use pipeline::{ExportPipeline, PipelineBuilder};

// Re-export the building blocks so embedders need a single dependency.
pub use cascade_css as css;
pub use cascade_tokens as tokens;
pub use cascade_traits as traits;
pub use cascade_types as types;
