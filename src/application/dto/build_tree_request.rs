use crate::analysis::domain::{Branch, NewCodePeriod, ProjectDescription};

/// BuildTreeRequest - Input of one analysis run
#[derive(Debug, Clone)]
pub struct BuildTreeRequest {
    /// Project as already known to storage
    pub project: ProjectDescription,
    /// Branch (or pull request) being analysed
    pub branch: Branch,
    /// New code period of the project, if any
    pub new_code_period: Option<NewCodePeriod>,
    /// Path of the project inside its SCM repository
    pub scm_base_path: Option<String>,
    /// Whether to time each visitor of the analysis crawl
    pub compute_durations: bool,
}

impl BuildTreeRequest {
    pub fn new(project: ProjectDescription, branch: Branch) -> Self {
        Self {
            project,
            branch,
            new_code_period: None,
            scm_base_path: None,
            compute_durations: false,
        }
    }

    pub fn with_new_code_period(mut self, new_code_period: Option<NewCodePeriod>) -> Self {
        self.new_code_period = new_code_period;
        self
    }

    pub fn with_scm_base_path(mut self, scm_base_path: Option<String>) -> Self {
        self.scm_base_path = scm_base_path;
        self
    }

    pub fn with_durations(mut self, compute_durations: bool) -> Self {
        self.compute_durations = compute_durations;
        self
    }
}
