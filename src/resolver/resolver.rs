//! 图标解析器核心：按平台表顺序做子串匹配，生成图标链接

use tracing::{debug, trace};

use super::formatter::IconFormatter;
use crate::platform::{IconLink, KnownPlatform, ICON_UNKNOWN, PLATFORMS};

/// 生成图标链接的能力（供外部嵌入方实现或调用）
pub trait LinkBuilder {
    fn build_icon_link(&self, url: &str) -> String;
}

/// 图标解析器
///
/// 无状态，平台表为静态只读数据，可在任意线程并发调用。
#[derive(Debug, Clone, Copy, Default)]
pub struct IconResolver;

impl IconResolver {
    pub fn new() -> Self {
        Self
    }

    /// 平台表（按匹配优先级排列）
    pub fn platforms(&self) -> &'static [KnownPlatform] {
        &PLATFORMS
    }

    /// 查找第一个子串出现在链接中的平台
    ///
    /// 匹配是纯子串匹配，不解析域名：`https://evil.com/mp.weixin.qq.com` 也会识别为微信。
    /// 多个平台同时命中时按表顺序取第一个，与其在链接中的位置无关。
    pub fn match_platform(&self, article_url: &str) -> Option<&'static KnownPlatform> {
        PLATFORMS.iter().find(|entry| entry.matches(article_url))
    }

    /// 解析文章链接，返回（图标链接, 平台代码）
    ///
    /// 未识别时返回（空字符串, 0），该函数对任意输入都不会失败。
    pub fn resolve(&self, article_url: &str) -> (String, u8) {
        match self.match_platform(article_url) {
            Some(entry) => {
                debug!("识别到平台 [{}]，链接：{}", entry.platform, article_url);
                (IconFormatter::format(entry.icon_url, article_url), entry.code)
            }
            None => {
                trace!("未识别平台，链接：{}", article_url);
                (String::new(), ICON_UNKNOWN)
            }
        }
    }

    /// 解析文章链接，返回结构化结果
    pub fn resolve_link(&self, article_url: &str) -> IconLink {
        match self.match_platform(article_url) {
            Some(entry) => IconLink {
                code: entry.code,
                platform: Some(entry.platform),
                html: IconFormatter::format(entry.icon_url, article_url),
            },
            None => IconLink::unknown(),
        }
    }

    /// 批量解析，结果顺序与输入一致
    pub fn resolve_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<IconLink> {
        let links: Vec<IconLink> = urls.iter().map(|url| self.resolve_link(url.as_ref())).collect();
        debug!(
            "批量解析完成，共{}条，识别{}条",
            links.len(),
            links.iter().filter(|link| link.is_known()).count()
        );
        links
    }
}

impl LinkBuilder for IconResolver {
    fn build_icon_link(&self, url: &str) -> String {
        self.resolve(url).0
    }
}
