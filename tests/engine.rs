use weft::analyzer::SymbolKind;
use weft::ast::{Program, Statement, StatementData};
use weft::parser::{ParseFailure, SourceParser, WeftParser};
use weft::query::OutlineKind;
use weft::{Config, DocumentId, Engine, Position, PositionEncoding, Range, Severity};

fn open(engine: &mut Engine, name: &str, text: &str) -> DocumentId {
    let id = DocumentId::from(name);
    let diagnostics = engine.update_document(id.clone(), text.to_string());
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    id
}

/// 直接递归数声明 (变量 / 常量 / 函数 / 参数 / import 名)
fn count_declarations(statements: &[Statement]) -> usize {
    statements
        .iter()
        .map(|stmt| match &stmt.data {
            StatementData::VarDeclaration(_) => 1,
            StatementData::FunctionDeclaration(func) => {
                1 + func.parameters.len() + count_declarations(&func.body)
            }
            StatementData::ImportDeclaration(import) => import.specifiers.len(),
            other => other
                .nested_blocks()
                .into_iter()
                .map(count_declarations)
                .sum(),
        })
        .sum()
}

#[test]
fn outline_matches_declaration_count() {
    let programs = [
        "",
        "let x = {a: 1, b: 2};",
        "fn add(a, b) { a + b }",
        "import { sin, cos } from \"math\"\nimport u from 'u'",
        "fn outer(x) {\n  if (x) { let y = 1 } else if (y) { const z = 2 } else { while (z) { let w } }\n  fn inner(p, q, r) { { let deep = 1 } }\n}",
        "let f = fn(a) { let hidden = 1 }\nlet g = (b) => b",
    ];

    for src in programs {
        let mut engine = Engine::default();
        let id = open(&mut engine, "outline.wf", src);
        let program = engine.program(&id).expect("program");
        assert_eq!(
            engine.document_symbols(&id).len(),
            count_declarations(&program.statements),
            "source: {}",
            src
        );
    }
}

#[test]
fn object_variable_has_property_members() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "obj.wf", "let x = {a: 1, b: 2};");

    let symbols = engine.symbols(&id);
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].kind, SymbolKind::Variable);
    let members = symbols[0].members().expect("members");
    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(members.iter().all(|m| m.kind == SymbolKind::Property));
}

#[test]
fn function_outline_has_parameters() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "fn.wf", "fn add(a, b) { a + b }");

    let outline: Vec<_> = engine
        .document_symbols(&id)
        .into_iter()
        .map(|e| (e.name, e.kind))
        .collect();
    assert_eq!(
        outline,
        vec![
            ("add".to_string(), OutlineKind::Function),
            ("a".to_string(), OutlineKind::Variable),
            ("b".to_string(), OutlineKind::Variable),
        ]
    );
    let symbols = engine.symbols(&id);
    assert_eq!(symbols[1].kind, SymbolKind::Parameter);
}

#[test]
fn window_member_completion_ignores_cursor_line() {
    let mut engine = Engine::default();
    let text = "let a = 1\nWindow.\n\n\nWindow.";
    let id = DocumentId::from("window.wf");
    // 文本本身解析失败也不影响成员补全
    engine.update_document(id.clone(), text.to_string());

    for position in [Position::new(1, 7), Position::new(4, 7)] {
        let labels: Vec<_> = engine
            .completion(&id, position)
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, vec!["create", "clear"]);
    }
}

#[test]
fn definition_of_global_only_symbol_is_none() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "def.wf", "let total = len([1])\nprint(total)");

    assert_eq!(engine.definition(&id, Position::new(1, 2)), None);
    let target = engine
        .definition(&id, Position::new(1, 8))
        .expect("local definition");
    assert_eq!(target.document, id);
    assert_eq!(
        target.range,
        Range::new(Position::new(0, 4), Position::new(0, 9))
    );
}

#[test]
fn signature_help_counts_commas() {
    let mut engine = Engine::default();
    let id = DocumentId::from("sig.wf");
    engine.update_document(id.clone(), "fn add(a, b) { a + b }\n".to_string());
    // 文档正在编辑, 最新文本解析失败, 仍用上一棵树里的 add
    let diagnostics = engine.update_document(id.clone(), "fn add(a, b) { a + b }\nadd(1, ".to_string());
    assert_eq!(diagnostics.len(), 1);

    let help = engine
        .signature_help(&id, Position::new(1, 7))
        .expect("signature help");
    assert_eq!(help.label, "fn add(a, b)");
    assert_eq!(help.parameters, vec!["a", "b"]);
    assert_eq!(help.active_parameter, 1);
}

#[test]
fn signature_help_on_member_of_local_object() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "member.wf", "let o = {f: fn(a, b) { a }}");
    engine.update_document(id.clone(), "let o = {f: fn(a, b) { a }}\no.f(1, ".to_string());

    let help = engine
        .signature_help(&id, Position::new(1, 7))
        .expect("signature help");
    assert_eq!(help.parameters, vec!["a", "b"]);
    assert_eq!(help.active_parameter, 1);
}

#[test]
fn deeply_nested_input_is_a_diagnostic() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "deep.wf", "let x = 1");

    let depth = 3000;
    let text = format!("let x = {}1{}", "(".repeat(depth), ")".repeat(depth));
    let diagnostics = engine.update_document(id.clone(), text);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Nesting deeper than"), "{}", diagnostics[0].message);
    assert_eq!(diagnostics[0].range.start.line, 0);

    // 旧树保留, 查询照常
    assert_eq!(engine.symbols(&id).len(), 1);
}

#[test]
fn format_replaces_whole_document() {
    let mut engine = Engine::default();
    let id = DocumentId::from("fmt.wf");
    engine.update_document(id.clone(), "if(x){print(x)}".to_string());

    let edit = engine.format(&id, Some(4)).expect("edit");
    assert_eq!(edit.new_text, "if (x) {\n    print(x);\n}");
    assert_eq!(
        edit.range,
        Range::new(Position::new(0, 0), Position::new(0, 15))
    );

    // 缺省 tab size 取配置
    let engine = {
        let mut engine = Engine::new(Config {
            tab_size: 2,
            ..Config::default()
        });
        engine.update_document(id.clone(), "if(x){print(x)}".to_string());
        engine
    };
    let edit = engine.format(&id, None).expect("edit");
    assert_eq!(edit.new_text, "if (x) {\n  print(x);\n}");
}

#[test]
fn parse_failure_keeps_stale_tree_and_reports_position() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "stale.wf", "let good = 1");
    let before = engine.program(&id).expect("program");

    let diagnostics = engine.update_document(id.clone(), "let good = 1\nlet = ".to_string());
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.source, "weft");
    assert_eq!(
        diagnostic.range,
        Range::new(Position::new(1, 4), Position::new(1, 5))
    );

    let after = engine.program(&id).expect("stale program");
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(engine.text(&id), Some("let good = 1\nlet = "));

    // 修好之后诊断清空
    assert!(engine.update_document(id.clone(), "let good = 2".to_string()).is_empty());
}

#[test]
fn positions_use_utf16_columns_by_default() {
    let mut engine = Engine::default();
    assert_eq!(engine.position_encoding(), PositionEncoding::Utf16);

    // 😀 在 UTF-16 里占两列, 其后的 x 在第 18 列 (按字符是第 17 列)
    let id = open(&mut engine, "emoji.wf", "let s = \"😀\"; let x = 1\nx");

    let target = engine.definition(&id, Position::new(1, 0)).expect("definition");
    assert_eq!(target.range, Range::new(Position::new(0, 18), Position::new(0, 19)));

    let outline = engine.document_symbols(&id);
    assert_eq!(outline[1].name, "x");
    assert_eq!(outline[1].range.start, Position::new(0, 18));

    assert!(engine.hover(&id, Position::new(0, 18)).is_some());

    let edit = engine.format(&id, None).expect("edit");
    assert_eq!(edit.range.end, Position::new(1, 1));

    let diagnostics = engine.update_document(id.clone(), "let s = \"😀\"; let = 1".to_string());
    assert_eq!(
        diagnostics[0].range,
        Range::new(Position::new(0, 18), Position::new(0, 19))
    );

    // 客户端协商成 UTF-32 时列号就是字符数
    let mut engine = Engine::default();
    engine.set_position_encoding(PositionEncoding::Utf32);
    let id = open(&mut engine, "emoji.wf", "let s = \"😀\"; let x = 1\nx");
    let target = engine.definition(&id, Position::new(1, 0)).expect("definition");
    assert_eq!(target.range.start, Position::new(0, 17));
}

#[test]
fn config_can_change_after_start() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "cfg.wf", "if(x){print(x)}");

    engine.set_config(Config {
        tab_size: 3,
        ..Config::default()
    });
    assert_eq!(engine.config().tab_size, 3);
    let edit = engine.format(&id, None).expect("edit");
    assert_eq!(edit.new_text, "if (x) {\n   print(x);\n}");
}

#[test]
fn documents_are_isolated() {
    let mut engine = Engine::default();
    let a = open(&mut engine, "a.wf", "let only_in_a = 1\n");
    let b = DocumentId::from("b.wf");
    assert_eq!(engine.update_document(b.clone(), "let (".to_string()).len(), 1);

    assert!(engine.program(&b).is_none());
    assert_eq!(engine.document_symbols(&a).len(), 1);
    assert!(engine.document_symbols(&b).is_empty());

    engine.close_document(&a);
    assert!(engine.program(&a).is_none());
    assert!(engine.completion(&a, Position::new(0, 0)).is_empty());
    assert_eq!(engine.hover(&a, Position::new(0, 5)), None);
    assert_eq!(engine.format(&a, None), None);
}

#[test]
fn hover_on_local_and_global() {
    let mut engine = Engine::default();
    let id = open(&mut engine, "hover.wf", "const LIMIT = 10\nprint(LIMIT)");

    let local = engine.hover(&id, Position::new(1, 8)).expect("hover");
    assert_eq!(local.contents, "```weft\nconst LIMIT: number\n```");

    let global = engine.hover(&id, Position::new(1, 1)).expect("hover");
    assert!(global.contents.contains("fn print(value)"));

    assert_eq!(engine.hover(&id, Position::new(9, 0)), None);
}

struct RejectAll;

impl SourceParser for RejectAll {
    fn parse(&self, _source: &str, document: &DocumentId) -> Result<Program, ParseFailure> {
        Err(ParseFailure::new(format!("nope at {}:2:3", document)))
    }
}

#[test]
fn custom_parser_collaborator() {
    let mut engine = Engine::with_parser(Config::default(), RejectAll);
    let id = DocumentId::from("file:///x.wf");
    let diagnostics = engine.update_document(id.clone(), "anything".to_string());
    assert_eq!(
        diagnostics[0].range,
        Range::new(Position::new(1, 2), Position::new(1, 3))
    );
    assert!(engine.program(&id).is_none());

    // 默认解析器可以直接使用
    assert!(WeftParser.parse("let a = 1", &id).is_ok());
}
