use crate::analysis::crawlers::{ComponentCrawler, VisitorsCrawler};
use crate::analysis::domain::{Component, ProjectAttributes};
use crate::analysis::holders::{DisabledComponentsHolder, TreeRootHolder};
use crate::analysis::services::{
    BranchKeyGenerator, ComponentTreeBuilder, ComponentUuidFactory, PublicKeyGenerator,
    ReferenceBranchComponentUuids, ReferenceBranchResolver, ReferenceComponentsVisitor,
    SizeMeasuresVisitor,
};
use crate::analysis::visitors::ComponentVisitor;
use crate::application::dto::{BuildTreeRequest, BuildTreeResponse};
use crate::ports::inbound::BuildComponentTreePort;
use crate::ports::outbound::{BranchComponentRepository, ComponentReader, ExistingComponentLookup};
use crate::shared::Result;

/// Version recorded when the report does not declare one
const DEFAULT_PROJECT_VERSION: &str = "not provided";

/// BuildComponentTreeUseCase - One analysis run over a flat report
///
/// Builds the identified component tree, keeps it in the tree root holder,
/// runs the analysis visitors over it in a single crawl and records the
/// stored components that disappeared.
///
/// # Type Parameters
/// * `R` - ComponentReader implementation
/// * `S` - Storage implementing both the existing-component lookup and the
///   per-branch listing
pub struct BuildComponentTreeUseCase<R, S> {
    reader: R,
    storage: S,
    tree_root_holder: TreeRootHolder,
    disabled_components_holder: DisabledComponentsHolder,
}

impl<R, S> BuildComponentTreeUseCase<R, S>
where
    R: ComponentReader,
    S: ExistingComponentLookup + BranchComponentRepository,
{
    pub fn new(reader: R, storage: S) -> Self {
        Self {
            reader,
            storage,
            tree_root_holder: TreeRootHolder::new(),
            disabled_components_holder: DisabledComponentsHolder::new(),
        }
    }

    pub fn tree_root_holder(&self) -> &TreeRootHolder {
        &self.tree_root_holder
    }

    pub fn disabled_components_holder(&self) -> &DisabledComponentsHolder {
        &self.disabled_components_holder
    }

    /// Executes the analysis run
    ///
    /// # Errors
    /// Returns an error if the report is invalid, storage cannot be queried,
    /// a visitor fails, or the use case has already been executed.
    pub fn execute(&self, request: BuildTreeRequest) -> Result<BuildTreeResponse> {
        let root = self.build_tree(&request)?;
        self.tree_root_holder.set_root(root)?;
        let root = self.tree_root_holder.root()?;

        let response = self.analyse(root, &request)?;
        let disabled = self.disabled_uuids(root, &request)?;
        let disabled_components = disabled.len();
        self.disabled_components_holder.set_uuids(disabled)?;

        tracing::info!(
            project = %response.project_key,
            components = response.component_count,
            disabled = disabled_components,
            "analysis complete"
        );
        Ok(BuildTreeResponse {
            disabled_components,
            ..response
        })
    }

    fn build_tree(&self, request: &BuildTreeRequest) -> Result<Component> {
        let metadata = self.reader.read_metadata()?;
        let raw_root = self.reader.component_by_ref(metadata.root_component_ref)?;
        let project_attributes = ProjectAttributes::new(
            metadata
                .project_version
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string()),
            metadata.build_string,
            metadata.scm_revision_id,
        );

        let uuid_factory = ComponentUuidFactory::new(&self.storage);
        let key_generator = BranchKeyGenerator::new(request.branch.clone());
        let mut builder = ComponentTreeBuilder::new(
            &key_generator,
            &PublicKeyGenerator,
            &uuid_factory,
            &self.reader,
            &request.project,
            &request.branch,
            project_attributes,
        );
        builder.build_project(&raw_root, request.scm_base_path.as_deref())
    }

    fn analyse(&self, root: &Component, request: &BuildTreeRequest) -> Result<BuildTreeResponse> {
        let resolver = ReferenceBranchComponentUuids::select(
            &self.storage,
            root.key(),
            &request.branch,
            request.new_code_period.as_ref(),
        );
        let mut size_measures = SizeMeasuresVisitor::new();
        let mut reference_components = ReferenceComponentsVisitor::new(&resolver);

        let durations = {
            let mut crawler = VisitorsCrawler::with_durations(
                vec![
                    ComponentVisitor::path_aware(&mut size_measures),
                    ComponentVisitor::type_aware(&mut reference_components),
                ],
                request.compute_durations,
            );
            crawler.visit(root)?;
            crawler.cumulative_durations()
        };

        Ok(BuildTreeResponse {
            project_key: root.key().to_string(),
            component_count: self.tree_root_holder.size()?,
            reference_branch: resolver.reference_branch_name().map(str::to_string),
            files_on_reference_branch: reference_components.files_on_reference_branch(),
            new_files: reference_components.new_files().to_vec(),
            measures: size_measures.into_measures(),
            disabled_components: 0,
            durations,
        })
    }

    fn disabled_uuids(&self, root: &Component, request: &BuildTreeRequest) -> Result<Vec<String>> {
        let mut disabled = Vec::new();
        for stored in self
            .storage
            .components_of_branch(root.key(), request.branch.name())?
        {
            if self.tree_root_holder.component_by_uuid(&stored.uuid)?.is_none() {
                disabled.push(stored.uuid);
            }
        }
        Ok(disabled)
    }
}

impl<R, S> BuildComponentTreePort for BuildComponentTreeUseCase<R, S>
where
    R: ComponentReader,
    S: ExistingComponentLookup + BranchComponentRepository,
{
    fn build_component_tree(&self, request: BuildTreeRequest) -> Result<BuildTreeResponse> {
        self.execute(request)
    }
}
