use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use kiosk_core::models::category::Category;
use kiosk_export::ExportFormat;
use kiosk_vitals::{Engine, Registry};

mod commands;
mod config;
mod input;

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(about = "Health check kiosk scoring CLI")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported parameters
    Parameters {
        /// Only this category, e.g. "lipid" or "body_composition"
        #[arg(long)]
        category: Option<Category>,
    },
    /// Validate a single value
    Validate {
        parameter_id: String,
        value: String,
    },
    /// Score a session file and export the result
    Assess {
        session: PathBuf,
        /// json, csv or text
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Add a plain-language explanation
        #[arg(long)]
        narrative: bool,
        /// Narrative language code (defaults to the configured language)
        #[arg(long)]
        language: Option<String>,
    },
    /// Print the narrative prompt for a session file
    Prompt {
        session: PathBuf,
        #[arg(long)]
        language: Option<String>,
    },
    /// Check registry and config integrity
    Check,
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::load_config(cli.config.as_deref())?;
    let engine = Engine::new(Registry::builtin(), config.scoring.clone())?;

    let output = match cli.command {
        Commands::Parameters { category } => commands::parameters(&engine, category),
        Commands::Validate {
            parameter_id,
            value,
        } => commands::validate(&engine, &parameter_id, &value)?,
        Commands::Assess {
            session,
            format,
            output,
            narrative,
            language,
        } => {
            let language = language.unwrap_or_else(|| config.language.clone());
            let rendered = commands::assess(
                &engine,
                &session,
                format,
                narrative.then_some(language.as_str()),
            )?;
            if let Some(path) = output {
                std::fs::write(&path, rendered.as_bytes())
                    .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;
                tracing::info!(path = %path.display(), "export written");
                return Ok(());
            }
            rendered
        }
        Commands::Prompt { session, language } => {
            let language = language.unwrap_or_else(|| config.language.clone());
            commands::prompt(&engine, &session, &language)?
        }
        Commands::Check => commands::check(&engine)?,
    };

    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_flag_uses_category_names() {
        let cli = Cli::try_parse_from(["kiosk", "parameters", "--category", "body_composition"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Parameters {
                category: Some(Category::BodyComposition)
            }
        ));

        let err = Cli::try_parse_from(["kiosk", "parameters", "--category", "cardio"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown category 'cardio'"));
    }
}
