//! 图标链接识别结果

use serde::{Deserialize, Serialize};

use super::model::{Platform, ICON_UNKNOWN};

/// 识别结果（用于序列化输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub code: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub html: String,
}

impl IconLink {
    /// 未识别结果：空链接 + 代码 0
    pub fn unknown() -> Self {
        Self {
            code: ICON_UNKNOWN,
            platform: None,
            html: String::new(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.platform.is_some()
    }
}

impl From<(String, u8)> for IconLink {
    fn from((html, code): (String, u8)) -> Self {
        match Platform::from_code(code) {
            Some(platform) => Self {
                code,
                platform: Some(platform),
                html,
            },
            None => Self::unknown(),
        }
    }
}

impl From<IconLink> for (String, u8) {
    fn from(link: IconLink) -> Self {
        (link.html, link.code)
    }
}
