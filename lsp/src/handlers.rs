use crate::{ServerResult, cast, convert};
use lsp_server::{Connection, ErrorCode, ExtractError, Message, Notification, Request, Response};
use lsp_types::notification::{
    DidChangeConfiguration, DidChangeTextDocument, DidCloseTextDocument, DidOpenTextDocument,
    Notification as LspNotification, PublishDiagnostics,
};
use lsp_types::request::{
    Completion, DocumentSymbolRequest, Formatting, GotoDefinition, HoverRequest,
    SignatureHelpRequest,
};
use lsp_types::{
    CompletionParams, CompletionResponse, DocumentFormattingParams, DocumentSymbolParams,
    DocumentSymbolResponse, GotoDefinitionParams, GotoDefinitionResponse, HoverParams, Location,
    PublishDiagnosticsParams, SignatureHelpParams, TextDocumentPositionParams, Uri,
};
use serde::Serialize;
use serde_json::Value;
use weft::{Config, Diagnostic, DocumentId, Engine, EngineError};

type RequestResult = Result<Value, (ErrorCode, String)>;

pub fn handle_request(engine: &Engine, connection: &Connection, req: Request) -> ServerResult<()> {
    let id = req.id.clone();
    let response = match dispatch(engine, req) {
        Ok(value) => Response::new_ok(id, value),
        Err((code, message)) => {
            log::warn!("{}", message);
            Response::new_err(id, code as i32, message)
        }
    };
    connection.sender.send(Message::Response(response))?;
    Ok(())
}

fn dispatch(engine: &Engine, req: Request) -> RequestResult {
    let req = match cast::<Completion>(req) {
        Ok((_, params)) => return to_value(completion(engine, params)),
        Err(err) => unmatched(err)?,
    };
    let req = match cast::<HoverRequest>(req) {
        Ok((_, params)) => return to_value(hover(engine, params)),
        Err(err) => unmatched(err)?,
    };
    let req = match cast::<GotoDefinition>(req) {
        Ok((_, params)) => return to_value(definition(engine, params)),
        Err(err) => unmatched(err)?,
    };
    let req = match cast::<SignatureHelpRequest>(req) {
        Ok((_, params)) => return to_value(signature_help(engine, params)),
        Err(err) => unmatched(err)?,
    };
    let req = match cast::<DocumentSymbolRequest>(req) {
        Ok((_, params)) => return to_value(document_symbols(engine, params)),
        Err(err) => unmatched(err)?,
    };
    let req = match cast::<Formatting>(req) {
        Ok((_, params)) => return to_value(formatting(engine, params)),
        Err(err) => unmatched(err)?,
    };

    Err((
        ErrorCode::MethodNotFound,
        format!("unhandled request: {}", req.method),
    ))
}

/// 方法不匹配时交给下一个分支; 参数解不开时回 InvalidParams
fn unmatched(err: ExtractError<Request>) -> Result<Request, (ErrorCode, String)> {
    match err {
        ExtractError::MethodMismatch(req) => Ok(req),
        ExtractError::JsonError { method, error } => Err((
            ErrorCode::InvalidParams,
            format!("invalid params for {}: {}", method, error),
        )),
    }
}

fn to_value(result: impl Serialize) -> RequestResult {
    serde_json::to_value(result).map_err(|e| (ErrorCode::InternalError, e.to_string()))
}

fn document_id(uri: &Uri) -> DocumentId {
    DocumentId::from(uri.as_str())
}

fn cursor(params: &TextDocumentPositionParams) -> (DocumentId, weft::Position) {
    (
        document_id(&params.text_document.uri),
        convert::position_from_lsp(params.position),
    )
}

// --- requests ---

fn completion(engine: &Engine, params: CompletionParams) -> Option<CompletionResponse> {
    let (id, position) = cursor(&params.text_document_position);
    let items = engine.completion(&id, position);
    Some(CompletionResponse::Array(
        items.into_iter().map(convert::completion_item).collect(),
    ))
}

fn hover(engine: &Engine, params: HoverParams) -> Option<lsp_types::Hover> {
    let (id, position) = cursor(&params.text_document_position_params);
    engine.hover(&id, position).map(convert::hover)
}

fn definition(engine: &Engine, params: GotoDefinitionParams) -> Option<GotoDefinitionResponse> {
    let request_uri = &params.text_document_position_params.text_document.uri;
    let (id, position) = cursor(&params.text_document_position_params);
    let target = engine.definition(&id, position)?;

    let uri = target
        .document
        .as_str()
        .parse::<Uri>()
        .unwrap_or_else(|_| request_uri.clone());
    Some(GotoDefinitionResponse::Scalar(Location {
        uri,
        range: convert::range(target.range),
    }))
}

fn signature_help(engine: &Engine, params: SignatureHelpParams) -> Option<lsp_types::SignatureHelp> {
    let (id, position) = cursor(&params.text_document_position_params);
    engine.signature_help(&id, position).map(convert::signature_help)
}

fn document_symbols(engine: &Engine, params: DocumentSymbolParams) -> Option<DocumentSymbolResponse> {
    let id = document_id(&params.text_document.uri);
    let symbols = engine.document_symbols(&id);
    Some(DocumentSymbolResponse::Nested(
        symbols.into_iter().map(convert::document_symbol).collect(),
    ))
}

fn formatting(engine: &Engine, params: DocumentFormattingParams) -> Option<Vec<lsp_types::TextEdit>> {
    let id = document_id(&params.text_document.uri);
    // tabSize 为 0 时退回配置值
    let tab_size = (params.options.tab_size > 0).then_some(params.options.tab_size as usize);
    let edit = engine.format(&id, tab_size)?;
    Some(vec![convert::text_edit(edit)])
}

// --- notifications ---

pub fn handle_notification(
    engine: &mut Engine,
    connection: &Connection,
    not: Notification,
) -> ServerResult<()> {
    match not.method.as_str() {
        DidOpenTextDocument::METHOD => {
            let Some(params) = extract::<DidOpenTextDocument>(not) else {
                return Ok(());
            };
            let document = params.text_document;
            let diagnostics = engine.update_document(document_id(&document.uri), document.text);
            publish_diagnostics(connection, document.uri, diagnostics, Some(document.version))?;
        }
        DidChangeTextDocument::METHOD => {
            let Some(mut params) = extract::<DidChangeTextDocument>(not) else {
                return Ok(());
            };
            // 全量同步: 最后一次变动就是整篇文本
            let Some(change) = params.content_changes.pop() else {
                return Ok(());
            };
            let uri = params.text_document.uri;
            let diagnostics = engine.update_document(document_id(&uri), change.text);
            publish_diagnostics(connection, uri, diagnostics, Some(params.text_document.version))?;
        }
        DidCloseTextDocument::METHOD => {
            let Some(params) = extract::<DidCloseTextDocument>(not) else {
                return Ok(());
            };
            let uri = params.text_document.uri;
            engine.close_document(&document_id(&uri));
            publish_diagnostics(connection, uri, Vec::new(), None)?;
        }
        DidChangeConfiguration::METHOD => {
            let Some(params) = extract::<DidChangeConfiguration>(not) else {
                return Ok(());
            };
            let config = apply_config(Config::from_settings(params.settings));
            log::info!("configuration changed (tab size {})", config.tab_size);
            engine.set_config(config);
        }
        method => log::debug!("ignored notification {}", method),
    }
    Ok(())
}

/// 解码失败的配置退回默认值; 合法的 logLevel 立即生效
pub fn apply_config(decoded: Result<Config, EngineError>) -> Config {
    let config = decoded.unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        Config::default()
    });

    match config.level_filter() {
        Ok(Some(level)) => log::set_max_level(level),
        Ok(None) => {}
        Err(e) => log::warn!("{}", e),
    }
    config
}

/// 参数非法的通知只记日志
fn extract<N>(not: Notification) -> Option<N::Params>
where
    N: LspNotification,
    N::Params: serde::de::DeserializeOwned,
{
    match not.extract(N::METHOD) {
        Ok(params) => Some(params),
        Err(e) => {
            log::warn!("bad {} notification: {:?}", N::METHOD, e);
            None
        }
    }
}

fn publish_diagnostics(
    connection: &Connection,
    uri: Uri,
    diagnostics: Vec<Diagnostic>,
    version: Option<i32>,
) -> ServerResult<()> {
    let diagnostics = diagnostics.into_iter().map(convert::diagnostic).collect();
    let params = PublishDiagnosticsParams::new(uri, diagnostics, version);
    let not = Notification::new(PublishDiagnostics::METHOD.to_string(), params);
    connection.sender.send(Message::Notification(not))?;
    Ok(())
}
