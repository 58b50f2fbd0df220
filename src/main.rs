mod cli;
mod config;

use cli::Args;
use component_tree::adapters::outbound::filesystem::JsonReportReader;
use component_tree::adapters::outbound::memory::InMemoryComponentRepository;
use component_tree::application::dto::{BuildTreeRequest, BuildTreeResponse};
use component_tree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use component_tree::application::use_cases::BuildComponentTreeUseCase;
use component_tree::shared::{ExitCode, Result};
use config::ConfigFile;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Logs go to stderr so stdout only carries the rendered tree.
/// `RUST_LOG` wins over the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let options = args.resolve(config)?;
    tracing::debug!(?options, "run options resolved");

    // Create adapters (Dependency Injection)
    let reader = JsonReportReader::open(&args.report)?;
    let storage = match options.snapshot.as_deref() {
        Some(path) => InMemoryComponentRepository::load(path)?,
        None => InMemoryComponentRepository::default(),
    };
    tracing::debug!(stored_components = storage.len(), "storage ready");

    let request = BuildTreeRequest::new(reader.project().clone(), options.branch.clone())
        .with_new_code_period(options.new_code_period.clone())
        .with_scm_base_path(options.scm_base_path.clone())
        .with_durations(options.compute_durations);

    let use_case = BuildComponentTreeUseCase::new(reader, storage);
    let response = use_case.execute(request)?;
    log_summary(&response);

    let colored = !args.no_color && args.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(options.format, colored);
    let rendered = formatter.format(use_case.tree_root_holder().root()?, options.max_depth)?;

    PresenterFactory::create(PresenterType::from(args.output)).present(&rendered)?;

    Ok(())
}

/// An explicit `--config` must exist; otherwise a config file next to the
/// report is picked up when present.
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }
    let report_dir = args
        .report
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok(config::discover_config(report_dir)?.unwrap_or_default())
}

fn log_summary(response: &BuildTreeResponse) {
    if let Some(measure) = response.measures.get(&response.project_key) {
        tracing::info!(
            files = measure.files,
            lines = measure.lines,
            "project size"
        );
    }
    match &response.reference_branch {
        Some(reference) => tracing::info!(
            reference_branch = %reference,
            on_reference = response.files_on_reference_branch,
            new_files = response.new_files.len(),
            "compared with reference branch"
        ),
        None => tracing::info!(new_files = response.new_files.len(), "no reference branch"),
    }
    for key in &response.new_files {
        tracing::debug!(file = %key, "new file");
    }
    if let Some(durations) = &response.durations {
        for duration in durations {
            tracing::info!(
                visitor = %duration.name,
                duration_ms = duration.duration.as_millis() as u64,
                "visitor duration"
            );
        }
    }
}
