use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use catalog::{BuiltinCatalog, CatalogDocument, CatalogSource, JsonFileCatalog};
use clap::{Parser, Subcommand};
use guide_core::ChecklistIntent;
use guide_core::model::StageId;
use services::ChecklistService;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use view::ChecklistPresenter;

mod config;
mod render;

use config::{CliOverrides, OutputFormat, Settings, load_settings};

/// Step-by-step IP protection checklist.
#[derive(Debug, Parser)]
#[command(name = "guide", version)]
struct Cli {
    /// Config file (default: ./guide.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON document to load instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Stage selected when the view starts
    #[arg(long, global = true)]
    stage: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay intents and print the resulting checklist view
    Show {
        /// Intents such as toggle-step:name-search or toggle-section:0
        intents: Vec<ChecklistIntent>,
    },
    /// Replay intents and print progress per stage
    Progress { intents: Vec<ChecklistIntent> },
    /// Print the loaded catalog as a JSON document
    Catalog,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config: self.config.clone(),
            catalog: self.catalog.clone(),
            stage: self.stage.clone(),
            log_level: self.log_level.clone(),
            format: self.format,
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn catalog_source(settings: &Settings) -> Box<dyn CatalogSource> {
    match &settings.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}

fn build_service(settings: &Settings) -> anyhow::Result<ChecklistService> {
    let source = catalog_source(settings);
    let service = ChecklistService::from_source(source.as_ref())
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;

    match settings.initial_stage.as_deref() {
        Some(raw) => {
            let stage = StageId::new(raw).context("invalid initial stage")?;
            Ok(service.with_initial_stage(&stage))
        }
        None => Ok(service),
    }
}

fn replay(service: &mut ChecklistService, intents: &[ChecklistIntent]) {
    for intent in intents {
        service.dispatch(intent);
    }
    debug!(
        intents = intents.len(),
        revision = service.revision(),
        "intents replayed"
    );
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli.overrides())?;
    init_tracing(&settings.log_level);
    info!(format = ?settings.format, "starting");

    let mut service = build_service(&settings)?;

    match cli.command {
        Command::Show { intents } => {
            replay(&mut service, &intents);
            let vm = ChecklistPresenter::new(service).current();
            match settings.format {
                OutputFormat::Text => print!("{}", render::checklist_text(&vm)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
            }
        }
        Command::Progress { intents } => {
            replay(&mut service, &intents);
            let report = service.progress_report();
            match settings.format {
                OutputFormat::Text => print!("{}", render::progress_text(&report)),
                OutputFormat::Json => {
                    let stages: Vec<_> = report
                        .stages
                        .iter()
                        .map(|item| {
                            serde_json::json!({
                                "stage": item.stage_id,
                                "title": item.title,
                                "progress": item.progress,
                            })
                        })
                        .collect();
                    let body = serde_json::json!({ "global": report.global, "stages": stages });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
            }
        }
        Command::Catalog => {
            let document = CatalogDocument::from_catalog(&service.catalog());
            println!("{}", document.to_json_pretty()?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_intents_and_global_flags() {
        let cli = Cli::try_parse_from([
            "guide",
            "show",
            "toggle-step:name-search",
            "select-stage:recording",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Command::Show { intents } => {
                assert_eq!(intents.len(), 2);
                assert_eq!(intents[1].to_string(), "select-stage:recording");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_malformed_intent() {
        let result = Cli::try_parse_from(["guide", "progress", "toggle-step"]);
        assert!(result.is_err());
    }

    #[test]
    fn service_honours_initial_stage_setting() {
        let settings = Settings {
            initial_stage: Some("performance".into()),
            ..Settings::default()
        };
        let service = build_service(&settings).unwrap();
        assert_eq!(service.snapshot().selected_stage().as_str(), "performance");
    }

    #[test]
    fn missing_catalog_file_is_reported_with_context() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/nope/catalog.json")),
            ..Settings::default()
        };
        let err = build_service(&settings).unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to load catalog from /nope/catalog.json"));
    }
}
