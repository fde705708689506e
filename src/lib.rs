//! rsiconlink - 文章链接平台识别与图标链接生成

// 导出全局错误类型
pub use self::error::{IconError, IconResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig, OutputFormat};

// 导出平台模块核心接口
pub use self::platform::{
    is_known_code, IconLink, KnownPlatform, Platform, ICON_MAX, ICON_MIN, ICON_UNKNOWN, PLATFORMS,
};

// 导出解析模块核心接口
pub use self::resolver::{
    get_icon_link, global_resolver, resolve_icon, IconFormatter, IconResolver, LinkBuilder,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod platform;
pub mod resolver;
