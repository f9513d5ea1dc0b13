use clap::ValueEnum;
use tracequery_core::format;

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One answer per line
    #[default]
    Human,
    /// JSON array of answers
    Json,
    /// Line-oriented records
    Records,
}

impl From<OutputFormat> for format::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Human => format::OutputFormat::Human,
            OutputFormat::Json => format::OutputFormat::Json,
            OutputFormat::Records => format::OutputFormat::Records,
        }
    }
}
