//! Small hand-built trees for unit tests.

use super::{
    Component, ComponentAttributes, FileAttributes, ProjectAttributes, ReportAttributes,
};

pub(crate) fn file(key: &str, path: &str, lines: i32) -> Component {
    let short_name = path.rsplit('/').next().unwrap_or(path);
    Component::builder(ComponentAttributes::File {
        report: ReportAttributes::new(Some(2), Some(path.to_string())),
        file: FileAttributes::new(false, None, lines, false, None).unwrap(),
    })
    .uuid(format!("uuid-{}", key))
    .db_key(key)
    .key(key)
    .name(path)
    .short_name(short_name)
    .build()
    .unwrap()
}

pub(crate) fn directory(key: &str, path: &str, children: Vec<Component>) -> Component {
    Component::builder(ComponentAttributes::Directory {
        report: ReportAttributes::new(None, Some(path.to_string())),
    })
    .uuid(format!("uuid-{}", key))
    .db_key(key)
    .key(key)
    .name(path)
    .short_name(path)
    .add_children(children)
    .build()
    .unwrap()
}

pub(crate) fn project(key: &str, children: Vec<Component>) -> Component {
    Component::builder(ComponentAttributes::Project {
        report: ReportAttributes::new(Some(1), None),
        project: ProjectAttributes::new("1.0", None, None),
    })
    .uuid(format!("uuid-{}", key))
    .db_key(key)
    .key(key)
    .name("Project")
    .add_children(children)
    .build()
    .unwrap()
}

/// `K1` holding `src/` (with `a.js`, `b.js`) and `test/` (with `a.js`)
pub(crate) fn sample_tree() -> Component {
    project(
        "K1",
        vec![
            directory(
                "K1:src",
                "src",
                vec![file("K1:src/a.js", "src/a.js", 10), file("K1:src/b.js", "src/b.js", 5)],
            ),
            directory("K1:test", "test", vec![file("K1:test/a.js", "test/a.js", 3)]),
        ],
    )
}
