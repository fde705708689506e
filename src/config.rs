//! 全局配置管理，存储前端（CLI / 批量输出）的可配置项
//! 平台表是固定的，不在配置范围内

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, IconResult};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 每行一条图标链接（未识别输出空行）
    #[default]
    Text,
    /// JSON 数组
    Json,
    /// 每行一个 JSON 对象
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = IconError;

    fn from_str(s: &str) -> IconResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::JsonLines),
            other => Err(IconError::InvalidInput(format!(
                "不支持的输出格式：{}，可选值：text, json, jsonl",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonLines => write!(f, "jsonl"),
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 输出格式
    pub output_format: OutputFormat,
    // 是否跳过未识别的链接
    pub skip_unknown: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            skip_unknown: false,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    pub fn skip_unknown(mut self, skip: bool) -> Self {
        self.config.skip_unknown = skip;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
