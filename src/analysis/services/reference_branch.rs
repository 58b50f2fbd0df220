use crate::analysis::domain::{Branch, NewCodePeriod};
use crate::ports::outbound::BranchComponentRepository;
use crate::shared::Result;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Resolves the uuid a component has on the branch it is compared against
pub trait ReferenceBranchResolver {
    /// Uuid of the component with this user-facing key on the reference
    /// branch, `None` when it does not exist there
    ///
    /// # Errors
    /// Returns an error if the components of the reference branch cannot be loaded
    fn component_uuid(&self, key: &str) -> Result<Option<String>>;

    fn reference_branch_name(&self) -> Option<&str>;
}

/// Uuids of the components of one branch, loaded on first lookup
pub struct BranchComponentUuids<'a> {
    repository: &'a dyn BranchComponentRepository,
    project_key: String,
    branch_name: String,
    uuids_by_key: OnceLock<HashMap<String, String>>,
}

impl<'a> BranchComponentUuids<'a> {
    pub fn new(
        repository: &'a dyn BranchComponentRepository,
        project_key: impl Into<String>,
        branch_name: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            project_key: project_key.into(),
            branch_name: branch_name.into(),
            uuids_by_key: OnceLock::new(),
        }
    }

    fn uuids_by_key(&self) -> Result<&HashMap<String, String>> {
        if let Some(uuids) = self.uuids_by_key.get() {
            return Ok(uuids);
        }
        let loaded: HashMap<String, String> = self
            .repository
            .components_of_branch(&self.project_key, &self.branch_name)?
            .into_iter()
            .map(|c| (c.key, c.uuid))
            .collect();
        tracing::debug!(
            branch = %self.branch_name,
            components = loaded.len(),
            "reference branch components loaded"
        );
        Ok(self.uuids_by_key.get_or_init(|| loaded))
    }
}

impl ReferenceBranchResolver for BranchComponentUuids<'_> {
    fn component_uuid(&self, key: &str) -> Result<Option<String>> {
        Ok(self.uuids_by_key()?.get(key).cloned())
    }

    fn reference_branch_name(&self) -> Option<&str> {
        Some(&self.branch_name)
    }
}

/// Where reference uuids come from for the current analysis
pub enum ReferenceBranchComponentUuids<'a> {
    /// Target branch of the analysed pull request
    PullRequestTarget(BranchComponentUuids<'a>),
    /// Branch set as new code period of the project
    NewCodePeriod(BranchComponentUuids<'a>),
    /// Reference branch of the analysed (non-main) branch
    ReferenceBranch(BranchComponentUuids<'a>),
    /// Main branch without a reference-branch new code period
    Absent,
}

impl<'a> ReferenceBranchComponentUuids<'a> {
    /// Picks, in this order: the pull request target, the new code period
    /// reference branch, the reference branch of a non-main branch. The main
    /// branch has none.
    pub fn select(
        repository: &'a dyn BranchComponentRepository,
        project_key: &str,
        branch: &Branch,
        new_code_period: Option<&NewCodePeriod>,
    ) -> Self {
        let for_branch = |name: &str| BranchComponentUuids::new(repository, project_key, name);

        if branch.is_pull_request() {
            let target = branch
                .reference_branch_name()
                .unwrap_or(Branch::DEFAULT_MAIN_NAME);
            return Self::PullRequestTarget(for_branch(target));
        }
        if let Some(name) = new_code_period.and_then(NewCodePeriod::reference_branch_name) {
            return Self::NewCodePeriod(for_branch(name));
        }
        if !branch.is_main() {
            let reference = branch
                .reference_branch_name()
                .unwrap_or(Branch::DEFAULT_MAIN_NAME);
            return Self::ReferenceBranch(for_branch(reference));
        }
        Self::Absent
    }

    fn delegate(&self) -> Option<&BranchComponentUuids<'a>> {
        match self {
            Self::PullRequestTarget(uuids)
            | Self::NewCodePeriod(uuids)
            | Self::ReferenceBranch(uuids) => Some(uuids),
            Self::Absent => None,
        }
    }
}

impl ReferenceBranchResolver for ReferenceBranchComponentUuids<'_> {
    fn component_uuid(&self, key: &str) -> Result<Option<String>> {
        match self.delegate() {
            Some(delegate) => delegate.component_uuid(key),
            None => Ok(None),
        }
    }

    fn reference_branch_name(&self) -> Option<&str> {
        self.delegate().and_then(|d| d.reference_branch_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::NewCodePeriodType;
    use crate::ports::outbound::BranchComponent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Branches {
        loads: AtomicUsize,
    }

    impl BranchComponentRepository for Branches {
        fn components_of_branch(
            &self,
            project_key: &str,
            branch_name: &str,
        ) -> Result<Vec<BranchComponent>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![BranchComponent {
                key: format!("{}:src/Foo.js", project_key),
                uuid: format!("{}-foo", branch_name),
            }])
        }
    }

    #[test]
    fn test_pull_request_uses_target_branch() {
        let repository = Branches::default();
        let period = NewCodePeriod::reference_branch("release");
        let resolver = ReferenceBranchComponentUuids::select(
            &repository,
            "K1",
            &Branch::pull_request("feature", "7", "develop"),
            Some(&period),
        );

        assert!(matches!(resolver, ReferenceBranchComponentUuids::PullRequestTarget(_)));
        assert_eq!(resolver.reference_branch_name(), Some("develop"));
        assert_eq!(
            resolver.component_uuid("K1:src/Foo.js").unwrap().as_deref(),
            Some("develop-foo")
        );
    }

    #[test]
    fn test_new_code_period_reference_branch_comes_before_branch_reference() {
        let repository = Branches::default();
        let period = NewCodePeriod::reference_branch("release");
        let resolver = ReferenceBranchComponentUuids::select(
            &repository,
            "K1",
            &Branch::branch("feature", Some("develop".to_string())),
            Some(&period),
        );

        assert!(matches!(resolver, ReferenceBranchComponentUuids::NewCodePeriod(_)));
        assert_eq!(resolver.reference_branch_name(), Some("release"));
    }

    #[test]
    fn test_new_code_period_applies_on_main_branch() {
        let repository = Branches::default();
        let period = NewCodePeriod::reference_branch("release");
        let resolver =
            ReferenceBranchComponentUuids::select(&repository, "K1", &Branch::default(), Some(&period));

        assert_eq!(resolver.reference_branch_name(), Some("release"));
    }

    #[test]
    fn test_other_periods_are_ignored() {
        let repository = Branches::default();
        let period = NewCodePeriod {
            period_type: NewCodePeriodType::PreviousVersion,
            value: None,
        };
        let resolver = ReferenceBranchComponentUuids::select(
            &repository,
            "K1",
            &Branch::branch("feature", Some("develop".to_string())),
            Some(&period),
        );

        assert!(matches!(resolver, ReferenceBranchComponentUuids::ReferenceBranch(_)));
        assert_eq!(resolver.reference_branch_name(), Some("develop"));
    }

    #[test]
    fn test_main_branch_has_no_reference() {
        let repository = Branches::default();
        let resolver = ReferenceBranchComponentUuids::select(&repository, "K1", &Branch::default(), None);

        assert!(matches!(resolver, ReferenceBranchComponentUuids::Absent));
        assert_eq!(resolver.reference_branch_name(), None);
        assert_eq!(resolver.component_uuid("K1:src/Foo.js").unwrap(), None);
        assert_eq!(repository.loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_branch_components_are_loaded_once() {
        let repository = Branches::default();
        let uuids = BranchComponentUuids::new(&repository, "K1", "develop");

        assert_eq!(uuids.component_uuid("K1:unknown").unwrap(), None);
        assert!(uuids.component_uuid("K1:src/Foo.js").unwrap().is_some());
        assert_eq!(repository.loads.load(Ordering::SeqCst), 1);
    }
}
