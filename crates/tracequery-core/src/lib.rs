//! Tracequery Core Library
//!
//! Trace graph model, breadth-first path enumeration and the route queries
//! built on it, plus edge-list ingestion, query plans and output rendering.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod plan;
