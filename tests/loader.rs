//! Tests for descriptor loading and source lookup.

mod common;

use common::{path_str, write_files};
use phpdocs_md::*;

const DESCRIPTORS: &str = r#"{
    "classes": [
        {
            "name": "App\\Http\\Controller",
            "file": "src/Controller.php",
            "methods": [
                { "name": "client", "doc_comment": "/** @return Client */" }
            ]
        },
        { "name": "App\\Model", "file": "src/Missing.php" }
    ]
}"#;

const CONTROLLER_SOURCE: &str = "<?php\nnamespace App\\Http;\n\nuse Vendor\\Net\\Client;\n\nclass Controller {}\n";

#[test]
fn relative_source_paths_resolve_against_document() {
    let dir = write_files(&[
        ("descriptors.json", DESCRIPTORS),
        ("src/Controller.php", CONTROLLER_SOURCE),
    ]);
    let index = DescriptorIndex::from_path(&dir.path().join("descriptors.json")).unwrap();

    let class = index.load_class("app\\http\\controller").unwrap();
    assert_eq!(
        path_str(class.file.as_deref().unwrap()),
        path_str(&dir.path().join("src/Controller.php"))
    );
    assert!(index.source_text(class).unwrap().contains("use Vendor\\Net\\Client;"));

    let controller = Documenter::new(&index).document("App\\Http\\Controller").unwrap();
    assert_eq!(controller.functions()[0].return_type(), "\\Vendor\\Net\\Client");
}

#[test]
fn unreadable_source_is_tolerated() {
    let dir = write_files(&[("descriptors.json", DESCRIPTORS)]);
    let index = DescriptorIndex::from_path(&dir.path().join("descriptors.json")).unwrap();
    let model = index.load_class("App\\Model").unwrap();
    assert!(index.source_text(model).is_none());
    assert!(Documenter::new(&index).document("App\\Model").is_ok());
}

#[test]
fn documentable_classes_skip_builtins() {
    let dir = write_files(&[("descriptors.json", DESCRIPTORS)]);
    let index = DescriptorIndex::from_path(&dir.path().join("descriptors.json")).unwrap();
    assert!(index.class_exists("\\stdClass"));
    assert!(index.is_builtin_class("stdclass"));
    assert_eq!(
        index.documentable_classes(),
        vec!["App\\Http\\Controller", "App\\Model"]
    );
}

#[test]
fn bare_list_documents_are_accepted() {
    let mut index = DescriptorIndex::new();
    let added = index.load_json_str(r#"[{ "name": "One" }, { "name": "Two" }]"#).unwrap();
    assert_eq!(added, 2);
    assert_eq!(index.len(), 2);
}

#[test]
fn load_errors_name_the_file() {
    let dir = write_files(&[("broken.json", "{ not json")]);
    let path = dir.path().join("broken.json");
    let err = DescriptorIndex::from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));

    let err = DescriptorIndex::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
