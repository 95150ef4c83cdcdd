pub mod core;
pub mod pipelines;

pub use self::core::{PanelUpdate, PipelineSender};
pub use pipelines::start_pipelines;
