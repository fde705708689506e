//! 平台数据模型定义
//! 固定的平台表：按声明顺序匹配，先匹配者优先，运行期只读

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// 未识别平台
pub const ICON_UNKNOWN: u8 = 0;
/// 合法平台代码下界
pub const ICON_MIN: u8 = 1;
/// 合法平台代码上界
pub const ICON_MAX: u8 = 7;

/// 已知的内容平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Wechat = 1,
    Juejin = 2,
    Zhihu = 3,
    Tencent = 4,
    Csdn = 5,
    Jianshu = 6,
    Infoq = 7,
}

/// 平台记录：匹配子串 + 图标地址 + 代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownPlatform {
    pub platform: Platform,
    pub code: u8,
    /// 在文章链接中查找的子串（区分大小写）
    pub host: &'static str,
    /// 仅用于输出的图标地址，不参与匹配
    pub icon_url: &'static str,
}

/// 平台表，顺序即匹配优先级
pub static PLATFORMS: [KnownPlatform; 7] = [
    KnownPlatform {
        platform: Platform::Wechat,
        code: 1,
        host: "mp.weixin.qq.com",
        icon_url: "https://mp.weixin.qq.com/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Juejin,
        code: 2,
        host: "juejin.cn",
        icon_url: "https://juejin.cn/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Zhihu,
        code: 3,
        host: "zhuanlan.zhihu.com",
        icon_url: "https://static.zhihu.com/heifetz/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Tencent,
        code: 4,
        host: "cloud.tencent.com",
        icon_url: "https://cloud.tencent.com/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Csdn,
        code: 5,
        host: "blog.csdn.net",
        icon_url: "https://blog.csdn.net/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Jianshu,
        code: 6,
        host: "jianshu.com",
        icon_url: "https://www.jianshu.com/favicon.ico",
    },
    KnownPlatform {
        platform: Platform::Infoq,
        code: 7,
        host: "infoq.cn",
        icon_url: "https://static001.infoq.cn/static/infoq/favicon/favicon-32x32.png",
    },
];

impl KnownPlatform {
    /// 链接中是否包含该平台的子串
    #[inline]
    pub fn matches(&self, article_url: &str) -> bool {
        article_url.contains(self.host)
    }
}

impl Platform {
    /// 平台代码（1..=7）
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 根据代码查找平台，0 或越界返回 None
    pub fn from_code(code: u8) -> Option<Self> {
        if !is_known_code(code) {
            return None;
        }
        PLATFORMS.iter().find(|p| p.code == code).map(|p| p.platform)
    }

    /// 小写平台名
    pub fn name(self) -> &'static str {
        match self {
            Platform::Wechat => "wechat",
            Platform::Juejin => "juejin",
            Platform::Zhihu => "zhihu",
            Platform::Tencent => "tencent",
            Platform::Csdn => "csdn",
            Platform::Jianshu => "jianshu",
            Platform::Infoq => "infoq",
        }
    }

    /// 对应的平台表记录
    pub fn info(self) -> &'static KnownPlatform {
        // 枚举值与表下标一一对应（code - 1）
        &PLATFORMS[(self.code() - ICON_MIN) as usize]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for Platform {
    type Error = IconError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(IconError::UnknownCode(code))
    }
}

/// 代码是否属于已知平台
pub fn is_known_code(code: u8) -> bool {
    (ICON_MIN..=ICON_MAX).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_and_codes() {
        let codes: Vec<u8> = PLATFORMS.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7]);

        for entry in PLATFORMS.iter() {
            assert_eq!(entry.platform.code(), entry.code);
            assert_eq!(entry.platform.info(), entry);
        }
    }

    #[test]
    fn test_from_code() {
        for entry in PLATFORMS.iter() {
            assert_eq!(Platform::from_code(entry.code), Some(entry.platform));
        }
        assert_eq!(Platform::from_code(ICON_UNKNOWN), None);
        assert_eq!(Platform::from_code(8), None);
        assert!(matches!(Platform::try_from(9), Err(IconError::UnknownCode(9))));
        assert_eq!(Platform::try_from(3).unwrap(), Platform::Zhihu);
    }

    #[test]
    fn test_is_known_code_bounds() {
        assert!(!is_known_code(0));
        assert!(is_known_code(1));
        assert!(is_known_code(7));
        assert!(!is_known_code(8));
    }

    #[test]
    fn test_platform_name_and_serde() {
        assert_eq!(Platform::Csdn.to_string(), "csdn");
        assert_eq!(serde_json::to_string(&Platform::Infoq).unwrap(), "\"infoq\"");
        let parsed: Platform = serde_json::from_str("\"wechat\"").unwrap();
        assert_eq!(parsed, Platform::Wechat);
    }
}
