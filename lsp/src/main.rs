mod convert;
mod handlers;

use log::LevelFilter;
use lsp_server::{Connection, ExtractError, Message, Request, RequestId};
use lsp_types::{
    CompletionOptions, HoverProviderCapability, InitializeParams, InitializeResult, OneOf,
    PositionEncodingKind, ServerCapabilities, ServerInfo, SignatureHelpOptions,
    TextDocumentSyncCapability, TextDocumentSyncKind,
};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::str::FromStr;
use weft::{Config, Engine, PositionEncoding};

pub type ServerResult<T> = Result<T, Box<dyn Error + Sync + Send>>;

fn main() -> ServerResult<()> {
    // 1. 初始化日志 (输出到 stderr，因为 stdout 被 LSP 占用了)
    init_logging()?;
    log::info!("weft LSP starting...");

    // 2. 建立连接 (基于 stdio)
    let (connection, io_threads) = Connection::stdio();

    // 3. 处理初始化握手 (Initialize), 顺带协商列号编码
    let (initialize_id, params) = connection.initialize_start()?;
    let params: InitializeParams = serde_json::from_value(params)?;
    let encoding = negotiate_encoding(&params);

    let result = InitializeResult {
        capabilities: server_capabilities(convert::position_encoding_kind(encoding)),
        server_info: Some(ServerInfo {
            name: "weft-lsp".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    };
    connection.initialize_finish(initialize_id, serde_json::to_value(result)?)?;
    main_loop(connection, params, encoding)?;
    io_threads.join()?;

    log::info!("weft LSP shutting down");
    Ok(())
}

/// 日志器本身放行所有级别, 实际级别由 `log::set_max_level` 控制,
/// 这样 initializationOptions 里的 logLevel 可以在启动后调整
fn init_logging() -> ServerResult<()> {
    SimpleLogger::new().with_level(LevelFilter::Trace).init()?;

    let level = ["WEFT_LOG", "RUST_LOG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find_map(|value| LevelFilter::from_str(&value).ok())
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
    Ok(())
}

/// 取客户端列出的第一个受支持编码; 客户端没说时协议规定是 UTF-16
fn negotiate_encoding(params: &InitializeParams) -> PositionEncoding {
    params
        .capabilities
        .general
        .as_ref()
        .and_then(|general| general.position_encodings.as_ref())
        .and_then(|kinds| kinds.iter().find_map(convert::position_encoding))
        .unwrap_or_default()
}

fn server_capabilities(encoding: PositionEncodingKind) -> ServerCapabilities {
    ServerCapabilities {
        position_encoding: Some(encoding),
        // 全量同步: 每次变动都发整篇文本
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![".".to_string()]),
            ..Default::default()
        }),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        definition_provider: Some(OneOf::Left(true)),
        signature_help_provider: Some(SignatureHelpOptions {
            trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
            retrigger_characters: None,
            work_done_progress_options: Default::default(),
        }),
        document_symbol_provider: Some(OneOf::Left(true)),
        document_formatting_provider: Some(OneOf::Left(true)),
        ..Default::default()
    }
}

fn main_loop(
    connection: Connection,
    params: InitializeParams,
    encoding: PositionEncoding,
) -> ServerResult<()> {
    let config = Config::from_value(params.initialization_options);
    let mut engine = Engine::new(handlers::apply_config(config));
    engine.set_position_encoding(encoding);

    log::info!("weft LSP initialized (tab size {})", engine.config().tab_size);

    for msg in &connection.receiver {
        match msg {
            Message::Request(req) => {
                if connection.handle_shutdown(&req)? {
                    return Ok(());
                }
                handlers::handle_request(&engine, &connection, req)?;
            }
            Message::Notification(not) => {
                handlers::handle_notification(&mut engine, &connection, not)?;
            }
            Message::Response(_) => {}
        }
    }
    Ok(())
}

// 辅助函数：尝试将通用的 Request 转换为具体的 LSP Request 类型
fn cast<R>(req: Request) -> Result<(RequestId, R::Params), ExtractError<Request>>
where
    R: lsp_types::request::Request,
    R::Params: serde::de::DeserializeOwned,
{
    req.extract(R::METHOD)
}
