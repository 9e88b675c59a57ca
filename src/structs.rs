use clap::Parser;
use clap::builder::PossibleValuesParser;
use crate::config::enums::report_format::ReportFormat;
use crate::config::impls::configuration::LOG_LEVELS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port the debugger connects to.
    pub listen_port: u16,
    /// Host of the JVM debug agent.
    pub backend_host: String,
    /// Port of the JVM debug agent.
    pub backend_port: u16,
    /// Never answer from the cache, statistics are still collected (case-insensitive).
    #[arg(long)]
    pub nocache: bool,
    /// TOML configuration file.
    #[arg(long)]
    pub config: Option<String>,
    /// Write the default configuration to --config if it is missing or broken.
    #[arg(long, requires = "config")]
    pub create_config: bool,
    /// Overrides log_level from the configuration.
    #[arg(long, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    pub log_level: Option<String>,
    /// Overrides the session report format from the configuration.
    #[arg(long, value_enum)]
    pub report_format: Option<ReportFormat>,
}

impl Cli {
    /// `--nocache` is accepted in any letter case.
    pub fn normalize_args<I>(args: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        args.into_iter()
            .map(|arg| if arg.eq_ignore_ascii_case("--nocache") { String::from("--nocache") } else { arg })
            .collect()
    }

    pub fn parse_args() -> Cli {
        Cli::parse_from(Self::normalize_args(std::env::args()))
    }
}
