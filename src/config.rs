use crate::error::EngineError;
use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

/// 编辑器传来的初始化选项, 所有字段都有默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 格式化请求未带 tabSize 时使用
    pub tab_size: usize,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 4,
            log_level: None,
        }
    }
}

impl Config {
    /// `null` / 缺省都视为默认配置
    pub fn from_value(value: Option<serde_json::Value>) -> Result<Self, EngineError> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    /// `workspace/didChangeConfiguration` 的 settings
    ///
    /// 客户端可能发 `{ "weft": {...} }`, 也可能直接发配置本身
    pub fn from_settings(settings: serde_json::Value) -> Result<Self, EngineError> {
        match settings {
            serde_json::Value::Object(mut map) if map.contains_key("weft") => {
                Self::from_value(map.remove("weft"))
            }
            other => Self::from_value(Some(other)),
        }
    }

    pub fn level_filter(&self) -> Result<Option<LevelFilter>, EngineError> {
        self.log_level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level)
                    .map_err(|_| EngineError::UnknownLogLevel(level.to_string()))
            })
            .transpose()
    }
}
