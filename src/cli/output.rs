use clap::ValueEnum;

/// Output format for waypath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals
    Human,
    /// JSON in the shape of the call contract
    #[default]
    Json,
}
