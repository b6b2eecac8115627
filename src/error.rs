use thiserror::Error;

/// 引擎层面的错误 (查询未命中不算错误)
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}
