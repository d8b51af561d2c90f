//! Library side of the kinlink CLI: logging setup and the staged pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
