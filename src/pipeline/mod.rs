// file: src/pipeline/mod.rs
// description: pipeline orchestration module exports
// reference: internal module structure

pub mod orchestrator;

pub use orchestrator::{PipelineOrchestrator, RunMode, RunSummary};
