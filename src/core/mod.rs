//! Core utilities for the FPL league statistics tool
//!
//! - `output`: persisting finished reports as named JSON documents

pub mod output;

pub use output::{write_string, JsonDirSink, ReportSink};
