//! Integration tests for composed code trees.
//!
//! These tests build full output files from structs, variables, and
//! functions, and verify that lazy children track construct mutations
//! across renders.

use quill_codegen::{CodeWriter, Formatter, Function, Indent, Variable};
use quill_types::{Raw, Struct, Tuple, I16, STR, U16, U8};

#[test]
fn test_full_file_composition() {
    let account = Struct::new("Account", [("id", "u64"), ("age", "u8")]).unwrap();

    let default_age = Variable::new("default_age", U8)
        .unwrap()
        .with_value(18)
        .unwrap();

    let login = Function::new("login")
        .unwrap()
        .params([("name", STR), ("password", STR)])
        .unwrap()
        .param("age", U8)
        .unwrap()
        .returns(STR)
        .unwrap();
    login.add(&default_age);
    login.add("authenticate(name, password);");

    let mut file = CodeWriter::new();
    file.add(&account);
    file.add(&default_age);
    file.add(login.lazy_declaration());
    file.add(&login);

    insta::assert_snapshot!(file.render(), @r#"
    struct Account {
        id: u64,
        age: u8,
    }
    let default_age: u8 = 18;
    fn login(name: str, password: str, age: u8) -> str;
    fn login(name: str, password: str, age: u8) -> str {
        let default_age: u8 = 18;
        authenticate(name, password);
    }
    "#);
}

#[test]
fn test_lazy_children_track_mutations() {
    let f = Function::new("work").unwrap();
    f.add("step_one();");

    let mut file = CodeWriter::new();
    file.add(&f);
    file.add("// interlude");
    file.add(&f);

    assert_eq!(
        file.render(),
        "fn work() {\n    step_one();\n}\n// interlude\nfn work() {\n    step_one();\n}"
    );

    // Mutating the construct changes both insertions on the next render.
    f.empty();
    let replacement = Variable::new("done", "bool").unwrap().with_value(true).unwrap();
    f.add(&replacement);

    let rendered = file.render();
    assert!(!rendered.contains("step_one"));
    assert_eq!(
        rendered,
        "fn work() {\n    let done: bool = true;\n}\n// interlude\nfn work() {\n    let done: bool = true;\n}"
    );
}

#[test]
fn test_struct_and_tuple_values_in_body() {
    let point = Struct::new("Point", [("x", "i16"), ("y", "i16")]).unwrap();

    let origin = Variable::new("origin", point.clone())
        .unwrap()
        .with_value(Raw::map([("x", 0), ("y", 0)]))
        .unwrap();

    let bounds = Variable::new("bounds", Tuple::new([U16, I16]).unwrap())
        .unwrap()
        .with_value(Raw::list([640, -480]))
        .unwrap();

    let setup = Function::new("setup").unwrap();
    setup.add(&origin);
    setup.add(&bounds);

    let mut file = CodeWriter::new();
    file.add(&point);
    file.add(&setup);

    insta::assert_snapshot!(file.render(), @r#"
    struct Point {
        x: i16,
        y: i16,
    }
    fn setup() {
        let origin: Point = Point { x: 0, y: 0, };
        let bounds: (u16, i16) = (640, -480);
    }
    "#);
}

#[test]
fn test_variable_reference_chain() {
    let first = Variable::new("seed", I16).unwrap().with_value(127).unwrap();
    let second = Variable::new("copy", I16)
        .unwrap()
        .with_value(&first)
        .unwrap();

    let mut file = CodeWriter::new();
    file.add(&first);
    file.add(&second);

    assert_eq!(
        file.render(),
        "let seed: i16 = 127;\nlet copy: i16 = seed;"
    );
}

#[test]
fn test_append_keeps_lazy_bindings() {
    let f = Function::new("shared").unwrap();

    let mut fragment = CodeWriter::new();
    fragment.add(&f);

    let mut file = CodeWriter::new();
    file.add("// header");
    file.append(&fragment);

    f.add("work();");
    assert_eq!(file.render(), "// header\nfn shared() {\n    work();\n}");
}

#[test]
fn test_tab_indentation() {
    let f = Function::new("f").unwrap();
    f.add("inner();");

    let mut file = CodeWriter::with_formatter(Formatter::new(Indent::Tab, "\n"));
    file.add(&f);

    assert_eq!(file.render(), "fn f() {\n\tinner();\n}");
}

#[test]
fn test_generated_banner_heads_the_file() {
    let mut file = CodeWriter::new();
    file.add_generated_banner(Some("MIT"), &["Maintainers <dev@quill.rs>"]);
    file.add(Variable::new("x", U8).unwrap().with_value(1).unwrap());

    let rendered = file.render();
    assert!(rendered.starts_with("/*\n"));
    assert!(rendered.contains("This code is licensed under: MIT"));
    assert!(rendered.ends_with("*/\nlet x: u8 = 1;"));
}
