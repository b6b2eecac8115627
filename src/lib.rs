//! weft: 脚本语言的编辑器智能引擎
//!
//! 补全 / 悬停 / 跳转 / 签名提示 / 大纲 / 格式化 / 诊断

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod query;
pub mod source;
pub mod token;
pub mod token_stream;
pub mod utils;

pub use config::Config;
pub use diagnostics::{Diagnostic, Severity};
pub use engine::{Engine, TextEdit};
pub use error::EngineError;
pub use source::{DocumentId, Position, PositionEncoding, Range};
