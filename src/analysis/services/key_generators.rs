use crate::analysis::domain::{create_effective_key, Branch, BranchType};
use crate::ports::outbound::ComponentKeyGenerator;

const BRANCH_KEY_SEPARATOR: &str = ":BRANCH:";
const PULL_REQUEST_KEY_SEPARATOR: &str = ":PULL_REQUEST:";

/// Generates storage keys that keep the components of each branch apart.
///
/// On the main branch the key is the effective key. Elsewhere the branch
/// name (or pull request key) is appended to it.
#[derive(Debug, Clone)]
pub struct BranchKeyGenerator {
    branch: Branch,
}

impl BranchKeyGenerator {
    pub fn new(branch: Branch) -> Self {
        Self { branch }
    }
}

impl ComponentKeyGenerator for BranchKeyGenerator {
    fn generate_key(&self, project_key: &str, path: Option<&str>) -> String {
        let effective_key = create_effective_key(project_key, path);
        match self.branch.branch_type() {
            BranchType::Main => effective_key,
            BranchType::Branch => {
                format!("{}{}{}", effective_key, BRANCH_KEY_SEPARATOR, self.branch.name())
            }
            BranchType::PullRequest => format!(
                "{}{}{}",
                effective_key,
                PULL_REQUEST_KEY_SEPARATOR,
                self.branch.pull_request_key().unwrap_or(self.branch.name())
            ),
        }
    }
}

/// Generates the user-facing key, identical on every branch
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicKeyGenerator;

impl ComponentKeyGenerator for PublicKeyGenerator {
    fn generate_key(&self, project_key: &str, path: Option<&str>) -> String {
        create_effective_key(project_key, path)
    }
}
