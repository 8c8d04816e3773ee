pub mod api;
pub mod consts;
pub mod error;
pub mod expander;
pub mod progress;
pub mod puzzle;
pub mod report;
pub mod stats;
pub mod store;
pub mod strategy;
// cmd and reports are binary modules (in main.rs or distinct files);
// they belong to the CLI, not the engine surface.
