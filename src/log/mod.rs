//! Logging and observability
//!
//! This module provides logging functionality, including JSONL logging of
//! analysis runs.

pub mod jsonl;

pub use jsonl::{AnalysisLogger, AnalysisRecord};
