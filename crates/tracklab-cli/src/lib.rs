//! CLI library components for tracklab.

pub mod logging;
pub mod pipeline;
