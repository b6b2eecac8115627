use super::*;
use crate::analyzer::{SymbolKind, collect_symbols, global_catalog};
use crate::parser::{SourceParser, WeftParser};
use crate::source::{DocumentId, Position, Range};

fn locals(src: &str) -> Vec<SymbolInfo> {
    let program = WeftParser
        .parse(src, &DocumentId::from("test.wf"))
        .unwrap_or_else(|e| panic!("parse failed: {}", e));
    collect_symbols(&program)
}

/// `|` 标记光标位置, 返回 (去掉标记的文本, 偏移)
fn cursor(marked: &str) -> (String, usize) {
    let offset = marked.find('|').expect("cursor marker");
    (marked.replacen('|', "", 1), offset)
}

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

// --- cursor ---

#[test]
fn identifier_at_cursor_edges() {
    let text = "let foo_1 = bar";
    assert_eq!(identifier_at(text, 4), Some("foo_1"));
    assert_eq!(identifier_at(text, 9), Some("foo_1"));
    assert_eq!(identifier_at(text, 10), None);
    assert_eq!(identifier_at(text, 100), Some("bar"));
    assert_eq!(line_number("a\nb\nc", 4), 3);
    assert_eq!(line_start("ab\ncd", 4), 3);
}

// --- completion ---

#[test]
fn member_completion_returns_exactly_the_members() {
    let (text, offset) = cursor("let a = 1\n\n\nWindow.|");
    let items = completion(&text, offset, &[]);
    assert_eq!(labels(&items), vec!["create", "clear"]);
    assert_eq!(items[0].insert_text.as_deref(), Some("create("));
}

#[test]
fn member_completion_on_local_object() {
    let src = "let p = {x: 1, y: 2}\np.";
    let items = completion(src, src.len(), &locals("let p = {x: 1, y: 2}"));
    assert_eq!(labels(&items), vec!["x", "y"]);
    assert!(items.iter().all(|i| i.kind == SymbolKind::Property));
}

#[test]
fn unknown_object_falls_back_to_general_list() {
    let (text, offset) = cursor("nothing.|");
    let items = completion(&text, offset, &[]);
    assert_eq!(items.len(), global_catalog().len());
}

#[test]
fn general_completion_filters_locals_by_line() {
    let src = "let early = 1\nlet here = 2\nlet later = 3";
    let symbols = locals(src);
    // 光标在第 2 行
    let items = completion(src, src.find("here").unwrap_or(0), &symbols);
    let names = labels(&items);
    assert!(names.contains(&"early"));
    assert!(!names.contains(&"here"));
    assert!(!names.contains(&"later"));
    assert!(names.contains(&"print"));
    assert_eq!(names.first(), Some(&"print"));
}

#[test]
fn local_masks_global_of_same_name() {
    let src = "let print = 1\n";
    let items = completion(src, src.len(), &locals(src));
    let prints: Vec<_> = items.iter().filter(|i| i.label == "print").collect();
    assert_eq!(prints.len(), 1);
    assert_eq!(prints[0].detail, "let print: number");
    assert_eq!(prints[0].insert_text, None);
    assert_eq!(items.len(), global_catalog().len());
}

#[test]
fn no_completion_inside_line_comment() {
    let (text, offset) = cursor("let a = 1 // Window.|");
    assert!(completion(&text, offset, &[]).is_empty());
}

#[test]
fn sibling_scope_names_leak_after_their_line() {
    let src = "fn f(a) {\n  let inner = a\n}\n";
    let items = completion(src, src.len(), &locals(src));
    let names = labels(&items);
    assert!(names.contains(&"inner"));
    assert!(names.contains(&"a"));
}

// --- hover ---

#[test]
fn hover_renders_detail_and_documentation() {
    let (text, offset) = cursor("pri|nt(1)");
    let hover = hover(&text, offset, &[]).expect("hover");
    assert!(hover.contents.starts_with("```weft\nfn print(value)\n```\n\n"));
    assert!(hover.contents.ends_with("Writes a value to standard output."));
}

#[test]
fn hover_is_not_line_filtered() {
    let src = "use_it(later)\nlet later = \"s\"";
    let symbols = locals(src);
    let hover = hover(src, 9, &symbols).expect("hover");
    assert_eq!(hover.contents, "```weft\nlet later: string\n```");
}

#[test]
fn hover_misses() {
    assert_eq!(hover("  ", 1, &[]), None);
    assert_eq!(hover("unknown", 2, &[]), None);
}

// --- definition ---

#[test]
fn definition_of_local_spans_identifier() {
    let src = "let total = 1\ntotal + 1";
    let doc = DocumentId::from("test.wf");
    let target = definition(&doc, src, src.len() - 5, &locals(src)).expect("definition");
    assert_eq!(target.document, doc);
    assert_eq!(
        target.range,
        Range::new(Position::new(0, 4), Position::new(0, 9))
    );
}

#[test]
fn definition_of_global_is_none() {
    let doc = DocumentId::from("test.wf");
    assert_eq!(definition(&doc, "print(1)", 2, &[]), None);
    assert_eq!(definition(&doc, "Window.create()", 2, &[]), None);
}

#[test]
fn last_declaration_wins() {
    let src = "let x = 1\nlet x = \"s\"\nx";
    let doc = DocumentId::from("test.wf");
    let target = definition(&doc, src, src.len(), &locals(src)).expect("definition");
    assert_eq!(target.range.start, Position::new(1, 4));
}

// --- signature help ---

#[test]
fn signature_of_local_function() {
    let src = "fn add(a, b) { a + b }\nadd(1, ";
    let help = signature_help(src, src.len(), &locals("fn add(a, b) { a + b }")).expect("help");
    assert_eq!(help.label, "fn add(a, b)");
    assert_eq!(help.parameters, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(help.active_parameter, 1);
}

#[test]
fn signature_of_namespace_member() {
    let (text, offset) = cursor("Window.create(800, 600, |");
    let help = signature_help(&text, offset, &[]).expect("help");
    assert_eq!(help.parameters, vec!["width", "height", "title"]);
    assert_eq!(help.active_parameter, 2);
}

#[test]
fn signature_of_lambda_variable() {
    let src = "let f = (x, y) => x\n";
    let text = format!("{}f(", src);
    let help = signature_help(&text, text.len(), &locals(src)).expect("help");
    assert_eq!(help.parameters, vec!["x", "y"]);
    assert_eq!(help.active_parameter, 0);
}

#[test]
fn signature_of_local_object_method() {
    let src = "let o = {f: fn(a, b) { a }, n: 1}\n";
    let symbols = locals(src);

    let text = format!("{}o.f(1, ", src);
    let help = signature_help(&text, text.len(), &symbols).expect("help");
    assert_eq!(help.label, "property f: fn(a, b)");
    assert_eq!(help.parameters, vec!["a", "b"]);
    assert_eq!(help.active_parameter, 1);

    // 非函数属性没有参数表
    let text = format!("{}o.n(", src);
    assert_eq!(signature_help(&text, text.len(), &symbols), None);
    let text = format!("{}o.missing(", src);
    assert_eq!(signature_help(&text, text.len(), &symbols), None);
}

#[test]
fn signature_of_parameter_called_as_function() {
    let src = "fn apply(cb, x) { cb(x) }";
    // cb 的类型未知, 不给出签名
    let offset = src.find("cb(").expect("call") + 3;
    assert_eq!(signature_help(src, offset, &locals(src)), None);
}

#[test]
fn signature_scan_is_not_depth_aware() {
    // 最近的 `(` 属于 len, 尽管光标已回到 print 的参数里
    let (text, offset) = cursor("print(len(x), |");
    let help = signature_help(&text, offset, &[]).expect("help");
    assert_eq!(help.label, "fn len(value)");
    assert_eq!(help.active_parameter, 1);
}

#[test]
fn signature_misses() {
    assert_eq!(signature_help("nothing here", 5, &[]), None);
    assert_eq!(signature_help("unknown(", 8, &[]), None);
    assert_eq!(signature_help("(1, ", 4, &[]), None);
    // 命名空间本身没有参数表
    assert_eq!(signature_help("Math(", 5, &[]), None);
}

#[test]
fn signature_without_parameters() {
    let help = signature_help("random(", 7, &[]).expect("help");
    assert!(help.parameters.is_empty());
}

// --- outline ---

#[test]
fn outline_lists_function_and_parameters() {
    let entries = outline(&locals("fn add(a, b) { a + b }"));
    let summary: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
    assert_eq!(
        summary,
        vec![
            ("add", OutlineKind::Function),
            ("a", OutlineKind::Variable),
            ("b", OutlineKind::Variable),
        ]
    );
    assert_eq!(
        entries[0].range,
        Range::new(Position::new(0, 3), Position::new(0, 6))
    );
}

#[test]
fn outline_skips_symbols_without_position() {
    let mut symbols = locals("let a = 1");
    symbols.push(SymbolInfo::new("ghost", SymbolKind::Variable, "let ghost"));
    assert_eq!(outline(&symbols).len(), 1);
}
