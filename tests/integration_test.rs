/// Integration tests for the analysis core and the application layer
mod test_utilities;

use component_tree::analysis::domain::ProjectAttributes;
use component_tree::analysis::services::{
    BranchKeyGenerator, ComponentUuidFactory, PublicKeyGenerator,
};
use component_tree::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use test_utilities::mocks::*;

fn project() -> ProjectDescription {
    ProjectDescription::new("K1", "Project 1", None)
}

fn java_project() -> MockComponentReader {
    MockComponentReader::project_with_files(
        "K1",
        &[
            ("src/main/java/A.java", 10),
            ("src/main/java/B.java", 5),
            ("src/test/T.java", 3),
        ],
    )
}

fn execute(
    reader: MockComponentReader,
    storage: MockStorage,
    request: BuildTreeRequest,
) -> (BuildComponentTreeUseCase<MockComponentReader, MockStorage>, BuildTreeResponse) {
    let use_case = BuildComponentTreeUseCase::new(reader, storage);
    let response = use_case.execute(request).unwrap();
    (use_case, response)
}

#[test]
fn test_single_child_directories_are_collapsed() {
    let (use_case, response) = execute(
        java_project(),
        MockStorage::new(),
        BuildTreeRequest::new(project(), Branch::default()),
    );

    let root = use_case.tree_root_holder().root().unwrap();
    assert_eq!(root.children().len(), 1);
    let src = &root.children()[0];
    assert_eq!(src.key(), "K1:src");
    let keys: Vec<&str> = src.children().iter().map(|c| c.key()).collect();
    assert_eq!(keys, vec!["K1:src/main/java", "K1:src/test"]);
    assert_eq!(src.children()[0].short_name(), "main/java");
    assert_eq!(src.children()[0].name(), "src/main/java");
    assert_eq!(src.children()[0].children()[1].short_name(), "B.java");
    assert_eq!(response.component_count, 7);
    assert_eq!(
        response.measures.get("K1:src"),
        Some(&SizeMeasure { files: 3, lines: 18 })
    );
}

#[test]
fn test_builder_reads_each_reference_once() {
    let reader = java_project();
    let storage = MockStorage::new().with_uuid("K1", "project-uuid");
    let uuid_factory = ComponentUuidFactory::new(&storage);
    let branch = Branch::default();
    let key_generator = BranchKeyGenerator::new(branch.clone());
    let project = project();
    let root_ref = reader.read_metadata().unwrap().root_component_ref;
    let raw_root = reader.component_by_ref(root_ref).unwrap();

    let root = ComponentTreeBuilder::new(
        &key_generator,
        &PublicKeyGenerator,
        &uuid_factory,
        &reader,
        &project,
        &branch,
        ProjectAttributes::new("1.0", None, None),
    )
    .build_project(&raw_root, Some("services/api"))
    .unwrap();

    assert_eq!(reader.lookup_count(), 4);
    assert_eq!(root.uuid(), "project-uuid");
    assert_eq!(uuid_factory.cache_size(), 7);
    assert_eq!(
        root.report_attributes().unwrap().scm_path(),
        Some("services/api")
    );
    let file = &root.children()[0].children()[1].children()[0];
    assert_eq!(
        file.report_attributes().unwrap().scm_path(),
        Some("services/api/src/test/T.java")
    );
}

#[test]
fn test_rebuild_with_same_collaborators_keeps_uuids() {
    let reader = java_project();
    let storage = MockStorage::new();
    let uuid_factory = ComponentUuidFactory::new(&storage);
    let branch = Branch::default();
    let key_generator = BranchKeyGenerator::new(branch.clone());
    let project = project();
    let raw_root = reader.component_by_ref(1).unwrap();
    let build = || {
        ComponentTreeBuilder::new(
            &key_generator,
            &PublicKeyGenerator,
            &uuid_factory,
            &reader,
            &project,
            &branch,
            ProjectAttributes::new("1.0", None, None),
        )
        .build_project(&raw_root, None)
        .unwrap()
    };

    let first = build();
    let second = build();

    assert_eq!(first, second);
    assert_eq!(uuid_factory.cache_size(), 7);
}

#[test]
fn test_enabled_legacy_component_keeps_its_uuid() {
    let storage = MockStorage::new()
        .with_legacy("K1:src/test/T.java", "legacy-disabled", false)
        .with_legacy("K1:src/test/T.java", "legacy-enabled", true);

    let (use_case, _) = execute(
        java_project(),
        storage,
        BuildTreeRequest::new(project(), Branch::default()),
    );

    let file = use_case
        .tree_root_holder()
        .component_by_db_key("K1:src/test/T.java")
        .unwrap()
        .unwrap();
    assert_eq!(file.uuid(), "legacy-enabled");
}

#[test]
fn test_storage_failure_is_propagated() {
    let use_case = BuildComponentTreeUseCase::new(java_project(), MockStorage::with_failure());

    let err = use_case
        .execute(BuildTreeRequest::new(project(), Branch::default()))
        .unwrap_err();

    assert!(err.chain().any(|cause| cause.to_string() == "Mock storage failure"));
    assert!(!use_case.tree_root_holder().is_initialized());
}

#[test]
fn test_self_referencing_file_is_rejected() {
    let mut file = RawComponent::file(2, "src/A.js", Some(1));
    file.child_refs = vec![2];
    let reader = MockComponentReader::new(1)
        .with_component(RawComponent::project(1, "K1", vec![2]))
        .with_component(file);
    let use_case = BuildComponentTreeUseCase::new(reader, MockStorage::new());

    let err = use_case
        .execute(BuildTreeRequest::new(project(), Branch::default()))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ComponentTreeError>(),
        Some(ComponentTreeError::FileWithChildren { reference: 2, .. })
    ));
    assert!(!use_case.tree_root_holder().is_initialized());
}

#[test]
fn test_pull_request_is_compared_with_its_target() {
    let storage = MockStorage::new()
        .with_branch_component("main", "K1:src/main/java/A.java", "main-a")
        .with_branch_component("main", "K1:src/test/T.java", "main-t");
    let branch = Branch::pull_request("feature/login", "42", "main");

    let (use_case, response) = execute(
        java_project(),
        storage,
        BuildTreeRequest::new(project(), branch),
    );

    let root = use_case.tree_root_holder().root().unwrap();
    assert_eq!(root.db_key(), "K1:PULL_REQUEST:42");
    assert_eq!(root.key(), "K1");
    assert_eq!(root.children()[0].db_key(), "K1:src:PULL_REQUEST:42");
    assert_eq!(response.reference_branch.as_deref(), Some("main"));
    assert_eq!(response.files_on_reference_branch, 2);
    assert_eq!(response.new_files, vec!["K1:src/main/java/B.java"]);
    assert_eq!(response.disabled_components, 0);
}

#[test]
fn test_new_code_period_reference_branch_is_used_on_main() {
    let storage = MockStorage::new().with_branch_component("release", "K1:src/test/T.java", "r-t");
    let request = BuildTreeRequest::new(project(), Branch::default())
        .with_new_code_period(Some(NewCodePeriod::reference_branch("release")));

    let (_, response) = execute(java_project(), storage, request);

    assert_eq!(response.reference_branch.as_deref(), Some("release"));
    assert_eq!(response.files_on_reference_branch, 1);
    assert_eq!(response.new_files.len(), 2);
}

#[test]
fn test_main_branch_without_reference_has_only_new_files() {
    let (_, response) = execute(
        java_project(),
        MockStorage::new(),
        BuildTreeRequest::new(project(), Branch::default()),
    );

    assert!(response.reference_branch.is_none());
    assert_eq!(response.files_on_reference_branch, 0);
    assert_eq!(response.new_files.len(), 3);
}

#[test]
fn test_removed_components_are_disabled() {
    let storage = MockStorage::new()
        .with_uuid("K1:src/test/T.java", "uuid-t")
        .with_branch_component("main", "K1:src/test/T.java", "uuid-t")
        .with_branch_component("main", "K1:src/Removed.java", "uuid-removed");

    let (use_case, response) = execute(
        java_project(),
        storage,
        BuildTreeRequest::new(project(), Branch::default()),
    );

    let disabled = use_case.disabled_components_holder().uuids().unwrap();
    assert_eq!(response.disabled_components, 1);
    assert!(disabled.contains("uuid-removed"));
    assert!(!disabled.contains("uuid-t"));
}

#[test]
fn test_port_runs_the_use_case() {
    let use_case = BuildComponentTreeUseCase::new(java_project(), MockStorage::new());
    let port: &dyn BuildComponentTreePort = &use_case;

    let response = port
        .build_component_tree(BuildTreeRequest::new(project(), Branch::default()).with_durations(true))
        .unwrap();

    let names: Vec<String> = response
        .durations
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names.len(), 2);
}

// ============================================================================
// Crawling a built tree
// ============================================================================

#[derive(Default)]
struct FileCounter {
    max_depth: Option<CrawlerDepthLimit>,
    files: usize,
    directories: usize,
}

impl<'c> TypeAwareVisitor<'c> for FileCounter {
    fn max_depth(&self) -> CrawlerDepthLimit {
        self.max_depth.unwrap_or(CrawlerDepthLimit::FILE)
    }

    fn order(&self) -> Order {
        Order::PreOrder
    }

    fn visit_directory(&mut self, _directory: &'c Component) -> Result<()> {
        self.directories += 1;
        Ok(())
    }

    fn visit_file(&mut self, _file: &'c Component) -> Result<()> {
        self.files += 1;
        Ok(())
    }
}

fn built_tree() -> BuildComponentTreeUseCase<MockComponentReader, MockStorage> {
    let (use_case, _) = execute(
        java_project(),
        MockStorage::new(),
        BuildTreeRequest::new(project(), Branch::default()),
    );
    use_case
}

#[test]
fn test_type_aware_crawler_stops_at_max_depth() {
    let use_case = built_tree();
    let root = use_case.tree_root_holder().root().unwrap();

    let mut crawler = DepthTraversalTypeAwareCrawler::new(FileCounter {
        max_depth: Some(CrawlerDepthLimit::DIRECTORY),
        ..FileCounter::default()
    });
    crawler.visit(root).unwrap();

    assert_eq!(crawler.visitor().directories, 3);
    assert_eq!(crawler.visitor().files, 0);
}

/// Records the path of every visited file, root first
struct FilePaths {
    log: Rc<RefCell<Vec<String>>>,
}

impl<'c> PathAwareVisitor<'c> for FilePaths {
    type Element = String;

    fn max_depth(&self) -> CrawlerDepthLimit {
        CrawlerDepthLimit::FILE
    }

    fn order(&self) -> Order {
        Order::PostOrder
    }

    fn name(&self) -> &str {
        "FilePaths"
    }

    fn create_for_any(&mut self, component: &'c Component) -> String {
        component.short_name().to_string()
    }

    fn visit_file(&mut self, _file: &'c Component, path: &mut Path<'_, 'c, String>) -> Result<()> {
        let mut segments: Vec<&str> = path.current_path().map(|e| e.element().as_str()).collect();
        segments.reverse();
        self.log.borrow_mut().push(format!("post {}", segments.join(" > ")));
        Ok(())
    }
}

/// Logs every visited directory before its children
struct DirectoryLog {
    log: Rc<RefCell<Vec<String>>>,
}

impl<'c> TypeAwareVisitor<'c> for DirectoryLog {
    fn max_depth(&self) -> CrawlerDepthLimit {
        CrawlerDepthLimit::DIRECTORY
    }

    fn order(&self) -> Order {
        Order::PreOrder
    }

    fn visit_directory(&mut self, directory: &'c Component) -> Result<()> {
        self.log.borrow_mut().push(format!("pre {}", directory.key()));
        Ok(())
    }
}

#[test]
fn test_visitors_crawler_interleaves_visitors_in_one_pass() {
    let use_case = built_tree();
    let root = use_case.tree_root_holder().root().unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut crawler = VisitorsCrawler::new(vec![
        ComponentVisitor::type_aware(DirectoryLog { log: log.clone() }),
        ComponentVisitor::path_aware(FilePaths { log: log.clone() }),
    ]);
    crawler.visit(root).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "pre K1:src",
            "pre K1:src/main/java",
            "post Project 1 > src > main/java > A.java",
            "post Project 1 > src > main/java > B.java",
            "pre K1:src/test",
            "post Project 1 > src > test > T.java",
        ]
    );
}

#[test]
fn test_path_aware_crawler_with_prelude_visitor() {
    let use_case = built_tree();
    let root = use_case.tree_root_holder().root().unwrap();

    let mut crawler = PathAwareCrawler::new(SizeMeasuresVisitor::new());
    crawler.visit(root).unwrap();

    let measures = crawler.into_inner().into_measures();
    assert_eq!(measures.get("K1"), Some(&SizeMeasure { files: 3, lines: 18 }));
    assert_eq!(
        measures.get("K1:src/main/java"),
        Some(&SizeMeasure { files: 2, lines: 15 })
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_text_tree_of_built_project() {
    let use_case = built_tree();
    let root = use_case.tree_root_holder().root().unwrap();

    let output = TextTreeFormatter::new(false)
        .format(root, CrawlerDepthLimit::LEAVES)
        .unwrap();

    assert_eq!(
        output,
        "Project 1 (K1)\n\
         └── src/\n    \
             ├── main/java/\n    \
             │   ├── A.java (10 lines)\n    \
             │   └── B.java (5 lines)\n    \
             └── test/\n        \
                 └── T.java (3 lines)\n"
    );
}

#[test]
fn test_json_tree_of_built_project() {
    let use_case = built_tree();
    let root = use_case.tree_root_holder().root().unwrap();

    let output = JsonTreeFormatter::new()
        .format(root, CrawlerDepthLimit::DIRECTORY)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["key"], "K1");
    assert_eq!(json["uuid"], root.uuid());
    assert_eq!(json["children"][0]["children"][1]["key"], "K1:src/test");
    assert!(json["children"][0]["children"][1].get("children").is_none());
}
