//! Tests for the markdown table generator and class documents.

mod common;

use common::{acme_index, index_from};
use phpdocs_md::render::format_example_comment;
use phpdocs_md::*;
use serde_json::json;

const HEADER: &str = "| Visibility | Function |\n|:-----------|:---------|\n";

fn table_with(funcs: &[&FunctionEntity]) -> String {
    let mut table = MarkdownTable::new();
    table.open_table();
    for func in funcs {
        table.add_func(func, false);
    }
    table.table()
}

fn param(name: &str, type_name: &str, default: &str) -> ParamEntity {
    let mut param = ParamEntity::new(name);
    param.set_type_name(type_name);
    param.set_default_value(Some(default.to_string()));
    param
}

// ─── Rows ───────────────────────────────────────────────────────────────────

#[test]
fn simple_function() {
    let func = FunctionEntity::new("myFunc");
    assert_eq!(
        table_with(&[&func]),
        format!("{HEADER}| public | <strong>myFunc()</strong> : <em>void</em> |")
    );
}

#[test]
fn function_with_all_features() {
    let mut func = FunctionEntity::new("someFunc");
    assert!(!func.is_static());
    assert!(!func.has_params());
    assert!(!func.is_deprecated());
    assert!(!func.is_abstract());
    assert_eq!(func.visibility().as_str(), "public");

    func.set_static(true);
    func.set_visibility(FunctionVisibility::Protected);
    func.code_mut().set_description("desc...");
    func.set_return_type("\\stdClass");
    func.set_params(vec![
        param("$var", "mixed", "null"),
        param("$other", "string", "'test'"),
    ]);
    assert!(func.has_params());

    assert_eq!(
        table_with(&[&func]),
        format!(
            "{HEADER}| protected static | <strong>someFunc(</strong><em>mixed</em> \
             <strong>$var=null</strong>, <em>string</em> <strong>$other='test'</strong>)\
             </strong> : <em>\\stdClass</em><br /><em>desc...</em> |"
        )
    );
}

#[test]
fn deprecated_function_is_struck_through() {
    let mut func = FunctionEntity::new("myFunc");
    func.code_mut().set_deprecated(true);
    func.code_mut().set_deprecation_message("Is deprecated");
    func.code_mut().set_description("Never shown");
    func.set_return_type("mixed");
    assert!(func.is_deprecated());

    assert_eq!(
        table_with(&[&func]),
        format!(
            "{HEADER}| public | <strike><strong>myFunc()</strong> : <em>mixed</em></strike>\
             <br /><em>DEPRECATED - Is deprecated</em> |"
        )
    );
}

#[test]
fn abstraction_can_be_toggled() {
    let mut func = FunctionEntity::new("someFunc");
    func.set_abstract(true);

    let mut table = MarkdownTable::new();
    table.open_table();
    table.add_func(&func, false);
    assert_eq!(
        table.table(),
        format!("{HEADER}| public | <strong>abstract someFunc()</strong> : <em>void</em> |")
    );

    table.open_table();
    table.set_declare_abstraction(false);
    table.add_func(&func, false);
    assert_eq!(
        table.table(),
        format!("{HEADER}| public | <strong>someFunc()</strong> : <em>void</em> |")
    );

    // Reopening keeps the setting.
    table.open_table();
    table.add_func(&func, false);
    assert!(!table.table().contains("abstract"));
}

#[test]
fn see_references_only_when_requested() {
    let mut func = FunctionEntity::new("run");
    func.code_mut()
        .set_see(vec!["<https://a.test>".to_string(), "Other::x()".to_string()]);

    let mut table = MarkdownTable::new();
    table.open_table();
    let row = table.add_func(&func, true);
    assert_eq!(
        row,
        "| public | <strong>run()</strong> : <em>void</em>\
         <br /><em>&nbsp;&nbsp;&nbsp;&nbsp;See: <https://a.test>, Other::x()</em> |"
    );

    let row = table.add_func(&func, false);
    assert_eq!(row, "| public | <strong>run()</strong> : <em>void</em> |");
}

// ─── Examples ───────────────────────────────────────────────────────────────

#[test]
fn example_comment_formatting() {
    assert_eq!(
        format_example_comment("<code>\n    $a = 1;\n    $b = 2;\n    </code>"),
        "```\n$a = 1;\n$b = 2;\n```"
    );
    assert_eq!(format_example_comment("var x = 1;"), "```js\nvar x = 1;\n```");
    assert!(format_example_comment("<?php echo 1;").starts_with("```php\n"));
}

#[test]
fn examples_are_appended_once_per_function() {
    let mut func = FunctionEntity::new("build");
    func.set_class("\\Acme\\Builder");
    func.code_mut().set_example("var x = 1;");

    let mut table = MarkdownTable::new();
    table.open_table();
    table.add_func(&func, false);
    table.add_func(&func, false);
    let out = table.table();
    assert_eq!(out.matches("###### Examples of Builder::build()").count(), 1);
    assert!(out.ends_with("\n###### Examples of Builder::build()\n```js\nvar x = 1;\n```"));

    table.set_append_examples(false);
    assert!(!table.table().contains("Examples of"));

    table.set_append_examples(true);
    table.open_table();
    assert_eq!(table.table(), HEADER.trim());
}

// ─── Class documents ────────────────────────────────────────────────────────

#[test]
fn titles() {
    let mut class = ClassEntity::new("Foo");
    assert_eq!(class.title(DEFAULT_TITLE_FORMAT), "Class: Foo");
    assert_eq!(class.anchor(), "class-foo");

    class.set_abstract(true);
    assert_eq!(class.title("%name% %extra%"), "Foo (abstract)");

    let mut interface = ClassEntity::new("Acme\\Shape");
    interface.set_interface(true);
    interface.set_abstract(true);
    assert_eq!(interface.title(DEFAULT_TITLE_FORMAT), "Interface: \\Acme\\Shape");
    assert_eq!(interface.title("%name% %extra%"), "\\Acme\\Shape (interface)");
    assert_eq!(interface.anchor(), "interface-acmeshape");
}

#[test]
fn deprecated_class_document() {
    let index = acme_index();
    let class = Documenter::new(&index)
        .document("Acme\\ExampleClassDepr")
        .unwrap();
    assert_eq!(
        render_class(&class, &RenderOptions::default()),
        format!(
            "<a name=\"class-acmeexampleclassdepr\"></a>\n### Class: \\Acme\\ExampleClassDepr\n\n\
             > **DEPRECATED** This one is deprecated Lorem te ipsum\n\n{HEADER}"
        )
    );
}

#[test]
fn full_class_document() {
    let index = acme_index();
    let class = Documenter::new(&index)
        .document("Acme\\ExampleClass")
        .unwrap();
    let out = render_class(&class, &RenderOptions::default());

    assert!(out.starts_with(
        "<a name=\"class-acmeexampleclass-abstract\"></a>\n### Class: \\Acme\\ExampleClass (abstract)\n\n"
    ));
    assert!(out.contains("> This is a description of this class\n\n"));
    assert!(out.contains("*This class implements \\Reflector*\n\n"));
    assert!(out.contains("| public | <strong>abstract isFunc()</strong> : <em>bool</em> |"));
    assert!(out.contains(
        "| protected | <strike><strong>funcC(</strong><em>mixed</em> <strong>$arg</strong>, \
         <em>array</em> <strong>$arr</strong>, <em>int</em> <strong>$bool=10</strong>)</strong> : \
         <em>\\Acme\\ExampleClass</em></strike><br /><em>DEPRECATED - This one is deprecated</em> |"
    ));
    assert!(out.contains("###### Examples of ExampleClass::funcB()\n```php\n"));
    assert!(out.contains("$lorem = 'te';"));

    let plain = render_class(
        &class,
        &RenderOptions {
            append_examples: false,
            declare_abstraction: false,
            ..RenderOptions::default()
        },
    );
    assert!(!plain.contains("Examples of"));
    assert!(plain.contains("| public | <strong>isFunc()</strong> : <em>bool</em> |"));
}

#[test]
fn class_relations_and_see_also() {
    let index = index_from(json!([
        { "name": "Acme\\Base" },
        { "name": "Acme\\Shape", "is_interface": true },
        {
            "name": "Acme\\Square",
            "extends": "Acme\\Base",
            "interfaces": ["Acme\\Shape", "Countable"],
            "doc_comment": "/**\n * A square.\n *\n * @see https://example.com Docs\n * @see Acme\\Circle\n */"
        },
        { "name": "Acme\\Solid", "is_interface": true, "interfaces": ["Acme\\Shape"] }
    ]));
    let documenter = Documenter::new(&index);

    let square = documenter.document("Acme\\Square").unwrap();
    let out = render_class(&square, &RenderOptions::default());
    assert!(out.contains("*This class extends \\Acme\\Base*\n\n"));
    assert!(out.contains("*This class implements \\Acme\\Shape, \\Countable*\n\n"));
    assert!(out.ends_with(
        "\n###### See also\n\n- [Docs](https://example.com)\n- Acme\\Circle\n"
    ));

    let solid = documenter.document("Acme\\Solid").unwrap();
    let out = render_class(&solid, &RenderOptions::default());
    assert!(out.contains("### Interface: \\Acme\\Solid\n\n"));
    assert!(out.contains("*This interface extends \\Acme\\Shape*"));
}
