use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigFile;
use component_tree::analysis::domain::{Branch, CrawlerDepthLimit, NewCodePeriod};
use component_tree::application::dto::OutputFormat;
use component_tree::shared::Result;

/// Build the component tree of a project from a flat analysis report
#[derive(Parser, Debug)]
#[command(name = "component-tree")]
#[command(version)]
#[command(about = "Build the component tree of a project from a flat analysis report", long_about = None)]
pub struct Args {
    /// Path to the flat report (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// Path to a config file (defaults to component-tree.config.yml next to the report)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Snapshot of the components stored by previous analyses (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Name of the analysed branch (the main branch when omitted or "main")
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Branch the analysed branch is compared against
    #[arg(long, value_name = "BRANCH")]
    pub reference_branch: Option<String>,

    /// Key of the analysed pull request; the reference branch is its target
    #[arg(long, value_name = "KEY")]
    pub pull_request: Option<String>,

    /// Path of the project inside its SCM repository
    #[arg(long, value_name = "PATH")]
    pub scm_base_path: Option<String>,

    /// Output format: tree or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Deepest component type to render (PROJECT, DIRECTORY, FILE or LEAVES)
    #[arg(short, long)]
    pub max_depth: Option<CrawlerDepthLimit>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log the time spent in each analysis visitor
    #[arg(long)]
    pub durations: bool,

    /// Never colour the text tree
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options of a run once command-line flags and the config file are merged
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub branch: Branch,
    pub new_code_period: Option<NewCodePeriod>,
    pub scm_base_path: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub format: OutputFormat,
    pub max_depth: CrawlerDepthLimit,
    pub compute_durations: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the flags with `config`; flags win
    ///
    /// # Errors
    /// Fails when a value coming from the config file cannot be parsed.
    pub fn resolve(&self, config: ConfigFile) -> Result<RunOptions> {
        let format = match (self.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };
        let max_depth = match (self.max_depth, config.max_depth.as_deref()) {
            (Some(max_depth), _) => max_depth,
            (None, Some(max_depth)) => max_depth.parse().map_err(anyhow::Error::msg)?,
            (None, None) => CrawlerDepthLimit::LEAVES,
        };
        let branch = self
            .branch_from_flags()
            .or_else(|| config.branch.as_ref().map(|b| b.to_branch()))
            .unwrap_or_default();

        Ok(RunOptions {
            branch,
            new_code_period: config.new_code_period,
            scm_base_path: self.scm_base_path.clone().or(config.scm_base_path),
            snapshot: self.snapshot.clone().or(config.snapshot),
            format,
            max_depth,
            compute_durations: self.durations || config.compute_durations.unwrap_or(false),
        })
    }

    fn branch_from_flags(&self) -> Option<Branch> {
        if let Some(key) = &self.pull_request {
            let name = self.branch.clone().unwrap_or_else(|| key.clone());
            let target = self
                .reference_branch
                .clone()
                .unwrap_or_else(|| Branch::DEFAULT_MAIN_NAME.to_string());
            return Some(Branch::pull_request(name, key.clone(), target));
        }
        let name = self.branch.as_deref()?;
        if name == Branch::DEFAULT_MAIN_NAME {
            return Some(Branch::main(name));
        }
        Some(Branch::branch(name, self.reference_branch.clone()))
    }
}
