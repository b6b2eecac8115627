use super::*;
use proptest::prelude::*;

fn fmt(src: &str) -> String {
    format_source(src, 4)
}

#[test]
fn expands_inline_block() {
    assert_eq!(fmt("if(x){print(x)}"), "if (x) {\n    print(x);\n}");
    assert_eq!(format_source("if(x){print(x)}", 2), "if (x) {\n  print(x);\n}");
}

#[test]
fn function_header_and_body() {
    assert_eq!(
        fmt("fn add(a,b){return a+b}"),
        "fn add(a, b) {\n    return a+b;\n}"
    );
}

#[test]
fn nested_blocks_and_else() {
    assert_eq!(
        fmt("if(a==b){\n} else {\nwhile(x){x-=1}\n}"),
        "if (a == b) {\n} else {\n    while (x) {\n        x -= 1;\n    }\n}"
    );
}

#[test]
fn property_lines_get_no_semicolon() {
    assert_eq!(fmt("let p = {a:1,b:2}"), "let p = {\n    a: 1, b: 2\n}");
}

#[test]
fn strings_are_left_alone() {
    assert_eq!(
        fmt("let a=1\nlet b=\"x=1,y\""),
        "let a = 1;\nlet b = \"x=1,y\";"
    );
    assert_eq!(fmt("print(\"{not a block}\")"), "print(\"{not a block}\");");
    assert_eq!(fmt("let s = \"a//b\" // c"), "let s = \"a//b\"; // c");
}

#[test]
fn trailing_comment_kept_after_semicolon() {
    assert_eq!(
        fmt("x = 1 // note=1\n\n\n\ny=2"),
        "x = 1; // note=1\n\ny = 2;"
    );
    assert_eq!(fmt("  // just a comment"), "// just a comment");
}

#[test]
fn lambdas_and_keyword_spacing() {
    assert_eq!(fmt("let f = fn(a) => a"), "let f = fn (a) => a;");
    assert_eq!(fmt("while  (x){\n}"), "while (x) {\n}");
}

#[test]
fn array_lines_indent() {
    assert_eq!(
        fmt("let arr = [\n1,\n2\n]"),
        "let arr = [\n    1,\n    2;\n];"
    );
}

#[test]
fn unbalanced_closers_do_not_underflow() {
    assert_eq!(fmt("}}}x"), "}\n}\n}x");
}

#[test]
fn dangling_operator_is_stable() {
    let once = fmt("x=");
    assert_eq!(once, "x =;");
    assert_eq!(fmt(&once), once);
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(fmt(""), "");
    assert_eq!(fmt("\n\n\n"), "");
    assert_eq!(fmt("a\n"), "a;\n");
}

#[test]
fn canonical_output_is_unchanged() {
    let canonical = "fn main() {\n    let x = 1;\n    if (x == 1) {\n        print(x); // done\n    }\n}";
    assert_eq!(fmt(canonical), canonical);
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "if", "while", "else", "fn", "import", "(", ")", "{", "}", "[", "]", ":", ";", ",",
        "=", "==", "=>", "+=", "//", " ", "  ", "\n", "\n\n", "\"", "'", "\\", "x", "1",
        "print", "é", "\t", "/", "{}", "} else {",
    ])
}

proptest! {
    #[test]
    fn formatting_is_idempotent(src in "[ -~\n\t]{0,120}") {
        let once = fmt(&src);
        prop_assert_eq!(fmt(&once), once);
    }

    #[test]
    fn formatting_code_like_text_is_idempotent(
        parts in prop::collection::vec(fragment(), 0..40),
        tab_size in 0usize..8,
    ) {
        let src = parts.concat();
        let once = format_source(&src, tab_size);
        prop_assert_eq!(format_source(&once, tab_size), once);
    }

    #[test]
    fn formatting_never_panics(src in "\\PC{0,200}") {
        let _ = fmt(&src);
    }
}
