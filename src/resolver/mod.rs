//! 解析模块：平台识别与图标链接生成
pub mod formatter;
pub mod global;
pub mod resolver;

// 导出核心接口
pub use self::formatter::{IconFormatter, ICON_SIZE};
pub use self::global::{get_icon_link, global_resolver, resolve_icon};
pub use self::resolver::{IconResolver, LinkBuilder};
