//! 平台模块：平台表与识别结果模型
pub mod model;
pub mod link;

// 导出核心接口
pub use self::model::{
    is_known_code, KnownPlatform, Platform, ICON_MAX, ICON_MIN, ICON_UNKNOWN, PLATFORMS,
};
pub use self::link::IconLink;
