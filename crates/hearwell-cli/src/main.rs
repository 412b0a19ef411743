use clap::Parser;
use eyre::Result;

use hearwell_cli::cli::{Cli, Command, ConfigCommand};
use hearwell_cli::{commands, config, telemetry};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    telemetry::init_tracing(&config.log_level, cli.json_logs)?;

    match cli.command {
        Command::Analyze { visit, format } => commands::run_analyze(&visit, format, &config),
        Command::Report {
            visit,
            out,
            template,
            markdown,
        } => commands::run_report(&visit, &out, template.as_deref(), markdown, &config),
        Command::NextVisit { visit } => commands::run_next_visit(&visit),
        Command::Config { command } => match command {
            ConfigCommand::Show => commands::run_config_show(&config_path, &config),
            ConfigCommand::Init { center, counselor } => {
                commands::run_config_init(&config_path, config, center, counselor)?;
                println!("wrote {}", config_path.display());
                Ok(())
            }
        },
    }
}
