//! CLI commands for tracequery

pub mod dispatch;
pub mod report;
