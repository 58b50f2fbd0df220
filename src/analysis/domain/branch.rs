use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    #[default]
    Main,
    Branch,
    PullRequest,
}

/// The branch (or pull request) being analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
    branch_type: BranchType,
    reference_branch_name: Option<String>,
    pull_request_key: Option<String>,
}

impl Branch {
    pub const DEFAULT_MAIN_NAME: &'static str = "main";

    pub fn main(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch_type: BranchType::Main,
            reference_branch_name: None,
            pull_request_key: None,
        }
    }

    /// A non-main branch compared against `reference_branch_name`
    pub fn branch(name: impl Into<String>, reference_branch_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            branch_type: BranchType::Branch,
            reference_branch_name,
            pull_request_key: None,
        }
    }

    /// A pull request whose target branch is `target_branch_name`
    pub fn pull_request(
        name: impl Into<String>,
        pull_request_key: impl Into<String>,
        target_branch_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            branch_type: BranchType::PullRequest,
            reference_branch_name: Some(target_branch_name.into()),
            pull_request_key: Some(pull_request_key.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch_type(&self) -> BranchType {
        self.branch_type
    }

    pub fn is_main(&self) -> bool {
        self.branch_type == BranchType::Main
    }

    pub fn is_pull_request(&self) -> bool {
        self.branch_type == BranchType::PullRequest
    }

    /// For a pull request this is the target branch
    pub fn reference_branch_name(&self) -> Option<&str> {
        self.reference_branch_name.as_deref()
    }

    pub fn pull_request_key(&self) -> Option<&str> {
        self.pull_request_key.as_deref()
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::main(Self::DEFAULT_MAIN_NAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewCodePeriodType {
    PreviousVersion,
    NumberOfDays,
    ReferenceBranch,
    SpecificAnalysis,
}

/// New code period configured for the project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCodePeriod {
    #[serde(rename = "type")]
    pub period_type: NewCodePeriodType,
    #[serde(default)]
    pub value: Option<String>,
}

impl NewCodePeriod {
    pub fn reference_branch(name: impl Into<String>) -> Self {
        Self {
            period_type: NewCodePeriodType::ReferenceBranch,
            value: Some(name.into()),
        }
    }

    /// Name of the reference branch when the period is of that type
    pub fn reference_branch_name(&self) -> Option<&str> {
        match self.period_type {
            NewCodePeriodType::ReferenceBranch => self.value.as_deref().filter(|v| !v.is_empty()),
            _ => None,
        }
    }
}
