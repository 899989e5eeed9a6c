//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads `.env`/environment configuration
//! - sets up logging
//! - picks the catalog source
//! - prints reports/plots or launches the TUI

use clap::Parser;
use tracing::info;

use crate::cli::{Command, GlobalArgs, ListArgs, PerfArgs, SearchArgs, ShowArgs, SourceKind};
use crate::config::AppConfig;
use crate::data::{Catalog, CatalogSource, PR_CURVE, ROC_CURVE, model_performance};
use crate::domain::{ExoplanetRecord, FilterSpec, MissionModel, RangeBound};
use crate::error::AppError;
use crate::filter::FilterEngine;
use crate::logging::LogTarget;

pub mod pipeline;

use pipeline::SourceChoice;

/// Entry point for the `exo` binary.
pub fn run() -> Result<(), AppError> {
    // We want `exo` and `exo --source api` to behave like `exo tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let is_tui = matches!(cli.command, Command::Tui);
    let log_target = match (&cli.global.log_file, is_tui) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    };
    crate::logging::init_tracing(&cli.global.log_level, log_target)?;

    let config = config_from_args(AppConfig::from_env()?, &cli.global);
    let source = pipeline::build_source(source_choice(&cli.global)?, &config)?;
    let engine = FilterEngine::new(config.filter.clone());
    info!(source = %source.describe(), "starting");

    match cli.command {
        Command::List(args) => handle_list(source, &engine, args),
        Command::Show(args) => handle_show(&source, args),
        Command::Search(args) => handle_search(&source, args),
        Command::Perf(args) => handle_perf(args),
        Command::Tui => crate::tui::run(Catalog::new(source), engine),
    }
}

/// CLI flags override environment values.
pub fn config_from_args(mut config: AppConfig, global: &GlobalArgs) -> AppConfig {
    if let Some(url) = &global.api_url {
        config.api.base_url = url.clone();
    }
    config
}

fn source_choice(global: &GlobalArgs) -> Result<SourceChoice, AppError> {
    match global.source {
        SourceKind::Mock => Ok(SourceChoice::Mock),
        SourceKind::Api => Ok(SourceChoice::Api),
        SourceKind::File => global
            .file
            .clone()
            .map(SourceChoice::File)
            .ok_or_else(|| AppError::usage("--source file requires --file <JSON>")),
    }
}

/// Turn `exo list` flags into a filter spec; unset bounds use the configured defaults.
pub fn spec_from_args(engine: &FilterEngine, args: &ListArgs) -> FilterSpec {
    let defaults = engine.default_spec();
    FilterSpec {
        search: args.search.clone(),
        year_range: RangeBound::new(
            args.year_min.unwrap_or(defaults.year_range.min),
            args.year_max.unwrap_or(defaults.year_range.max),
        ),
        discovery_method: args.method.clone(),
        size_range: RangeBound::new(
            args.size_min.unwrap_or(defaults.size_range.min),
            args.size_max.unwrap_or(defaults.size_range.max),
        ),
        mission: args.mission.clone(),
    }
}

fn handle_list(source: CatalogSource, engine: &FilterEngine, args: ListArgs) -> Result<(), AppError> {
    let spec = spec_from_args(engine, &args);
    let mut catalog = Catalog::new(source);
    let records = catalog.load()?;

    let (shown, summary) = pipeline::filter_catalog(engine, records, &spec);
    println!("{}", crate::report::format_catalog_table(&shown, summary));

    if let Some(path) = &args.export {
        crate::io::export_records(path, &shown)?;
        info!(path = %path.display(), count = shown.len(), "exported records");
    }
    Ok(())
}

fn handle_show(source: &CatalogSource, args: ShowArgs) -> Result<(), AppError> {
    let record = source.load_one(&args.id)?;
    let view = pipeline::prepare_detail(&record);

    println!("{}", crate::report::format_detail(&record, &view.template));
    if !args.no_plot {
        let plot =
            crate::plot::render_series_plot(&view.template, &view.points, args.width, args.height);
        println!("{plot}");
    }
    Ok(())
}

fn handle_search(source: &CatalogSource, args: SearchArgs) -> Result<(), AppError> {
    let results = pipeline::search_catalog(source, &args.query)?;
    let refs: Vec<&ExoplanetRecord> = results.iter().collect();
    let footer = format!("{} result(s) for '{}'", refs.len(), args.query);
    println!("{}", crate::report::format_catalog_table(&refs, footer));
    Ok(())
}

fn handle_perf(args: PerfArgs) -> Result<(), AppError> {
    let models: Vec<MissionModel> = match args.model {
        Some(model) => vec![model],
        None => MissionModel::ALL.to_vec(),
    };
    for model in models {
        println!(
            "{}",
            crate::report::format_performance(model, &model_performance(model))
        );
    }
    if !args.no_plot {
        println!("{}", crate::plot::render_xy_plot("ROC (fpr vs tpr)", &ROC_CURVE, 40, 12));
        println!(
            "{}",
            crate::plot::render_xy_plot("Precision-recall (recall vs precision)", &PR_CURVE, 40, 12)
        );
    }
    Ok(())
}

/// Rewrite argv so `exo` defaults to `exo tui`.
///
/// Rules:
/// - `exo`                       -> `exo tui`
/// - `exo --source api ...`      -> `exo tui --source api ...`
/// - `exo --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "list" | "show" | "search" | "perf" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MethodFilter, MissionFilter};

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn global() -> GlobalArgs {
        GlobalArgs {
            source: SourceKind::Mock,
            file: None,
            api_url: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["exo"])), argv(&["exo", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["exo", "--source", "api"])),
            argv(&["exo", "tui", "--source", "api"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(rewrite_args(argv(&["exo", "list"])), argv(&["exo", "list"]));
        assert_eq!(rewrite_args(argv(&["exo", "--help"])), argv(&["exo", "--help"]));
    }

    #[test]
    fn file_source_requires_path() {
        let mut g = global();
        g.source = SourceKind::File;
        let err = source_choice(&g).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }

    #[test]
    fn api_url_flag_overrides_env() {
        let mut g = global();
        g.api_url = Some("http://flag:9000".to_string());
        let config = config_from_args(AppConfig::default(), &g);
        assert_eq!(config.api.base_url, "http://flag:9000");
    }

    #[test]
    fn list_spec_falls_back_to_configured_bounds() {
        let engine = FilterEngine::default();
        let args = ListArgs {
            search: String::new(),
            year_min: Some(2010),
            year_max: None,
            method: MethodFilter::All,
            size_min: None,
            size_max: Some(2.0),
            mission: MissionFilter::All,
            export: None,
        };
        let spec = spec_from_args(&engine, &args);
        assert_eq!(spec.year_range, RangeBound::new(2010, 2024));
        assert_eq!(spec.size_range, RangeBound::new(0.0, 2.0));
    }
}
