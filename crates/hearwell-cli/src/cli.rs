use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "hearwell",
    version,
    about = "Audiometric scoring and visit reports for hearing-aid clinics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the per-user default.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a visit document and print the analysis.
    Analyze {
        #[arg(value_name = "VISIT_JSON")]
        visit: PathBuf,

        /// Output format (defaults to the configured one).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a visit summary as DOCX (or Markdown).
    Report {
        #[arg(value_name = "VISIT_JSON")]
        visit: PathBuf,

        #[arg(long, value_name = "FILE")]
        out: PathBuf,

        /// Tera template to render instead of the built-in summary.
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,

        /// Write the rendered Markdown instead of a DOCX document.
        #[arg(long)]
        markdown: bool,
    },

    /// Print the recommended next visit date.
    NextVisit {
        #[arg(value_name = "VISIT_JSON")]
        visit: PathBuf,
    },

    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Init {
        /// Center identifier stamped onto reports.
        #[arg(long)]
        center: Option<String>,

        #[arg(long)]
        counselor: Option<String>,
    },
}
