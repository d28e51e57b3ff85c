//! Startup configuration from process arguments and environment.

/// Environment variable enabling the JSON transcript after the reveal
pub const TRANSCRIPT_VAR: &str = "FAIR_RPS_TRANSCRIPT";

/// Settings read once at startup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Move names in cycle order, as given on the command line
    pub moves: Vec<String>,
    /// Print the round transcript as JSON after the reveal
    pub transcript: bool,
}

impl CliConfig {
    /// Read the process arguments and environment
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var(TRANSCRIPT_VAR).ok().as_deref(),
        )
    }

    pub fn from_parts<I>(args: I, transcript_var: Option<&str>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            moves: args.into_iter().collect(),
            transcript: transcript_var.map(parse_flag).unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
