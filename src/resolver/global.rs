//! 全局解析器单例与便捷函数
use once_cell::sync::Lazy;

use super::resolver::IconResolver;
use crate::platform::IconLink;

/// 全局解析器实例
static GLOBAL_RESOLVER: Lazy<IconResolver> = Lazy::new(IconResolver::new);

/// 获取全局解析器
pub fn global_resolver() -> &'static IconResolver {
    &GLOBAL_RESOLVER
}

/// 解析文章链接，返回（图标链接, 平台代码）
pub fn get_icon_link(article_url: &str) -> (String, u8) {
    GLOBAL_RESOLVER.resolve(article_url)
}

/// 解析文章链接，返回结构化结果
pub fn resolve_icon(article_url: &str) -> IconLink {
    GLOBAL_RESOLVER.resolve_link(article_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_get_icon_link() {
        assert_eq!(get_icon_link("https://juejin.cn/post/999").1, 2);
        assert_eq!(get_icon_link("https://example.org/post/999"), (String::new(), 0));
        assert!(resolve_icon("https://www.jianshu.com/p/1").is_known());
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let url = format!("https://cloud.tencent.com/developer/article/{}", i);
                    global_resolver().resolve(&url).1
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4);
        }
    }
}
