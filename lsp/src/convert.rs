//! weft 引擎类型 <-> LSP 协议类型

use lsp_types::{
    CompletionItemKind, DiagnosticSeverity, Documentation, HoverContents, MarkupContent,
    MarkupKind, ParameterInformation, ParameterLabel, PositionEncodingKind, SignatureInformation,
};
use weft::analyzer::SymbolKind;
use weft::query::{CompletionItem, Hover, OutlineEntry, OutlineKind, SignatureHelp};
use weft::{Diagnostic, Position, PositionEncoding, Range, Severity, TextEdit};

pub fn position_encoding(kind: &PositionEncodingKind) -> Option<PositionEncoding> {
    if *kind == PositionEncodingKind::UTF8 {
        Some(PositionEncoding::Utf8)
    } else if *kind == PositionEncodingKind::UTF16 {
        Some(PositionEncoding::Utf16)
    } else if *kind == PositionEncodingKind::UTF32 {
        Some(PositionEncoding::Utf32)
    } else {
        None
    }
}

pub fn position_encoding_kind(encoding: PositionEncoding) -> PositionEncodingKind {
    match encoding {
        PositionEncoding::Utf8 => PositionEncodingKind::UTF8,
        PositionEncoding::Utf16 => PositionEncodingKind::UTF16,
        PositionEncoding::Utf32 => PositionEncodingKind::UTF32,
    }
}

pub fn position_from_lsp(position: lsp_types::Position) -> Position {
    Position::new(position.line, position.character)
}

pub fn position(position: Position) -> lsp_types::Position {
    lsp_types::Position::new(position.line, position.character)
}

pub fn range(range: Range) -> lsp_types::Range {
    lsp_types::Range::new(position(range.start), position(range.end))
}

pub fn diagnostic(diagnostic: Diagnostic) -> lsp_types::Diagnostic {
    let severity = match diagnostic.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
        Severity::Hint => DiagnosticSeverity::HINT,
    };
    lsp_types::Diagnostic::new(
        range(diagnostic.range),
        Some(severity),
        None,
        Some(diagnostic.source),
        diagnostic.message,
        None,
        None,
    )
}

fn completion_kind(kind: SymbolKind) -> CompletionItemKind {
    match kind {
        SymbolKind::Variable | SymbolKind::Parameter => CompletionItemKind::VARIABLE,
        SymbolKind::Constant => CompletionItemKind::CONSTANT,
        SymbolKind::Function => CompletionItemKind::FUNCTION,
        SymbolKind::Module => CompletionItemKind::MODULE,
        SymbolKind::Property => CompletionItemKind::PROPERTY,
    }
}

pub fn completion_item(item: CompletionItem) -> lsp_types::CompletionItem {
    lsp_types::CompletionItem {
        label: item.label,
        kind: Some(completion_kind(item.kind)),
        detail: Some(item.detail),
        documentation: item.documentation.map(Documentation::String),
        insert_text: item.insert_text,
        ..Default::default()
    }
}

pub fn hover(hover: Hover) -> lsp_types::Hover {
    lsp_types::Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: hover.contents,
        }),
        range: None,
    }
}

pub fn signature_help(help: SignatureHelp) -> lsp_types::SignatureHelp {
    let active_parameter = u32::try_from(help.active_parameter).ok();
    let parameters = help
        .parameters
        .into_iter()
        .map(|label| ParameterInformation {
            label: ParameterLabel::Simple(label),
            documentation: None,
        })
        .collect();

    lsp_types::SignatureHelp {
        signatures: vec![SignatureInformation {
            label: help.label,
            documentation: None,
            parameters: Some(parameters),
            active_parameter,
        }],
        active_signature: Some(0),
        active_parameter,
    }
}

fn symbol_kind(kind: OutlineKind) -> lsp_types::SymbolKind {
    match kind {
        OutlineKind::Variable => lsp_types::SymbolKind::VARIABLE,
        OutlineKind::Constant => lsp_types::SymbolKind::CONSTANT,
        OutlineKind::Function => lsp_types::SymbolKind::FUNCTION,
        OutlineKind::Module => lsp_types::SymbolKind::MODULE,
        OutlineKind::Property => lsp_types::SymbolKind::PROPERTY,
    }
}

pub fn document_symbol(entry: OutlineEntry) -> lsp_types::DocumentSymbol {
    let range = range(entry.range);
    #[allow(deprecated)]
    lsp_types::DocumentSymbol {
        name: entry.name,
        detail: Some(entry.detail),
        kind: symbol_kind(entry.kind),
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: None,
    }
}

pub fn text_edit(edit: TextEdit) -> lsp_types::TextEdit {
    lsp_types::TextEdit::new(range(edit.range), edit.new_text)
}
