//! 图标链接格式化
//! 输出形如 `[<img src="ICON" weight="20" height="20">](URL)` 的 Markdown 片段

/// 图标尺寸
pub const ICON_SIZE: u32 = 20;

/// 图标链接格式化工具
pub struct IconFormatter;

impl IconFormatter {
    /// 生成图标链接
    ///
    /// 注意：
    /// - 宽度属性名就是 `weight`，下游渲染依赖这个拼写，不要改成 `width`
    /// - `article_url` 原样写入，不做任何转义；来源不可信时调用方需自行处理
    pub fn format(icon_url: &str, article_url: &str) -> String {
        format!(
            "[<img src=\"{}\" weight=\"{}\" height=\"{}\">]({})",
            icon_url, ICON_SIZE, ICON_SIZE, article_url
        )
    }
}
