//! 全局错误类型定义
//! 平台识别本身不会失败（未识别用代码 0 表示），这里只覆盖外围的输入输出

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    // 输入相关错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
    #[error("未知平台代码：{0}")]
    UnknownCode(u8),

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type IconResult<T> = Result<T, IconError>;
