#![allow(dead_code)]

use std::fs;
use std::path::Path;

use phpdocs_md::{DescriptorIndex, Documenter};
use serde_json::{Value, json};

/// Source of the file declaring the `Acme` fixture classes.  Only its
/// `use` statements matter to the engine.
pub const ACME_SOURCE: &str = r#"<?php

namespace Acme;

interface ExampleInterface
{
    public function func($arg = 'a');
}

abstract class ExampleClass implements \Reflector
{
}

use PHPDocsMD\Console\CLI;

class ClassWithStaticFunc
{
}
"#;

const EXAMPLE_INTERFACE_DOC: &str = r#"/**
 * Interface ExampleInterface
 *
 * @package Acme
 * @ignore
 */"#;

const EXAMPLE_CLASS_DOC: &str = r#"/**
 * This is a description
 * of this class
 *
 * @package Acme
 */"#;

const FUNC_A_DOC: &str = r#"/**
     * Description of a*a
     *
     * @param       $arg
     * @param array $arr
     * @param int   $bool
     */"#;

const FUNC_B_DOC: &str = r#"/**
     * Description of b
     *
     * @param int   $arg
     * @param array $arr
     * @param int   $bool
     *
     * @example
     *      <code>
     *      <?php
     *      $lorem = 'te';
     *      $ipsum = 'dolor';
     *      </code>
     *
     */"#;

const FUNC_C_DOC: &str = r#"/**
     * Description of c
     *
     * @param       $arg
     * @param array $arr
     * @param int   $bool
     *
     * @return \Acme\ExampleClass
     * @deprecated This one is deprecated
     */"#;

const DEPRECATED_CLASS_DOC: &str = r#"/**
 * @deprecated This one is deprecated
 *
 * Lorem te ipsum
 *
 * @package    Acme
 */"#;

fn method(name: &str, doc: Option<&str>) -> Value {
    json!({
        "name": name,
        "doc_comment": doc,
    })
}

fn abc_params() -> Value {
    json!([
        { "name": "arg" },
        { "name": "arr", "type": "array" },
        { "name": "bool", "default": { "kind": "int", "value": 10 } }
    ])
}

/// Descriptors mirroring the classes of `ACME_SOURCE`, as a reflection
/// dump would report them.
pub fn acme_descriptors() -> Value {
    json!({ "classes": [
        {
            "name": "Acme\\ExampleInterface",
            "is_interface": true,
            "is_abstract": true,
            "source": ACME_SOURCE,
            "doc_comment": EXAMPLE_INTERFACE_DOC,
            "methods": [{
                "name": "func",
                "is_abstract": true,
                "doc_comment": "/**\n * @param string $arg\n *\n * @return \\stdClass\n */",
                "parameters": [
                    { "name": "arg", "default": { "kind": "string", "value": "a" } }
                ]
            }]
        },
        {
            "name": "Acme\\InterfaceReferringToImportedClass",
            "is_interface": true,
            "is_abstract": true,
            "source": ACME_SOURCE,
            "methods": [
                {
                    "name": "theFunc",
                    "is_abstract": true,
                    "doc_comment": "/**\n * @return CLI\n */"
                },
                {
                    "name": "funcReturningArr",
                    "is_abstract": true,
                    "doc_comment": "/**\n * @return CLI[]\n */"
                }
            ]
        },
        {
            "name": "Acme\\ExampleClass",
            "is_abstract": true,
            "interfaces": ["Reflector"],
            "source": ACME_SOURCE,
            "doc_comment": EXAMPLE_CLASS_DOC,
            "methods": [
                {
                    "name": "funcA",
                    "doc_comment": FUNC_A_DOC,
                    "parameters": abc_params()
                },
                {
                    "name": "funcB",
                    "doc_comment": FUNC_B_DOC,
                    "parameters": abc_params()
                },
                {
                    "name": "funcD",
                    "parameters": [
                        { "name": "arg" },
                        { "name": "arr", "default": { "kind": "array" } },
                        {
                            "name": "depr",
                            "type": "?Acme\\ExampleInterface",
                            "default": { "kind": "null" }
                        },
                        {
                            "name": "class",
                            "type": "stdClass",
                            "default": { "kind": "null" }
                        }
                    ]
                },
                method("getFunc", None),
                method("hasFunc", None),
                { "name": "isFunc", "is_abstract": true },
                method("someFunc", Some("/**\n * @ignore\n */")),
                {
                    "name": "funcC",
                    "visibility": "protected",
                    "doc_comment": FUNC_C_DOC,
                    "parameters": abc_params()
                },
                { "name": "privFunc", "visibility": "private" }
            ]
        },
        {
            "name": "Acme\\ExampleClassDepr",
            "source": ACME_SOURCE,
            "doc_comment": DEPRECATED_CLASS_DOC
        },
        {
            "name": "Acme\\SomeClass",
            "source": ACME_SOURCE,
            "methods": [
                { "name": "aMethod", "doc_comment": "/**\n * @return int\n */" }
            ]
        },
        {
            "name": "Acme\\ClassImplementingInterface",
            "extends": "Acme\\SomeClass",
            "interfaces": ["Acme\\ExampleInterface"],
            "source": ACME_SOURCE,
            "methods": [
                {
                    "name": "func",
                    "doc_comment": "/**\n * @inheritdoc\n */",
                    "parameters": [
                        { "name": "arg", "default": { "kind": "string", "value": "a" } }
                    ]
                },
                { "name": "aMethod", "doc_comment": "/**\n * @inheritDoc\n */" },
                {
                    "name": "methodReturnNativeClass",
                    "doc_comment": "/**\n * @return \\FilesystemIterator\n */"
                },
                {
                    "name": "methodReturningArrayNativeClass",
                    "doc_comment": "/**\n * @return \\FilesystemIterator[]\n */"
                }
            ]
        },
        {
            "name": "Acme\\ClassWithStaticFunc",
            "source": ACME_SOURCE,
            "methods": [{
                "name": "someStaticFunc",
                "is_static": true,
                "doc_comment": "/**\n * @return float\n */"
            }]
        }
    ]})
}

/// A descriptor index holding the built-in stubs and the `Acme` classes.
pub fn acme_index() -> DescriptorIndex {
    DescriptorIndex::from_json_str(&acme_descriptors().to_string())
        .expect("fixture descriptors should deserialize")
}

/// An index built from ad-hoc descriptors, on top of the built-in stubs.
pub fn index_from(classes: Value) -> DescriptorIndex {
    DescriptorIndex::from_json_str(&classes.to_string()).expect("descriptors should deserialize")
}

/// Names of the functions of a documented class, in model order.
pub fn function_names(documenter: &Documenter<'_>, class: &str) -> Vec<String> {
    use phpdocs_md::Documented;
    documenter
        .document(class)
        .expect("class should document")
        .functions()
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

/// Write `files` under a fresh temp directory.
pub fn write_files(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for (rel_path, content) in files {
        let full = dir.path().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full, content).expect("failed to write file");
    }
    dir
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
