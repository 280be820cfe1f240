//! アバター（Avatar）实体

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 发帖身份
///
/// `avatar_id` 由客户端在创建时给出，存储层不生成。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub avatar_id: i64,
    /// 显示名
    pub avatar_name: String,
    /// 签名 / 状态文字
    pub avatar_text: String,
    pub image_url: String,
    /// 显示颜色，如 `#f6f6f6`
    pub color: String,
    #[serde(skip)]
    #[sqlx(default)]
    pub last_update: Option<NaiveDateTime>,
}

/// 新建 Avatar 的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvatar {
    pub avatar_id: i64,
    pub avatar_name: String,
    pub avatar_text: String,
    pub image_url: String,
    pub color: String,
}

impl NewAvatar {
    pub fn into_avatar(self, last_update: NaiveDateTime) -> Avatar {
        Avatar {
            avatar_id: self.avatar_id,
            avatar_name: self.avatar_name,
            avatar_text: self.avatar_text,
            image_url: self.image_url,
            color: self.color,
            last_update: Some(last_update),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let avatar = Avatar {
            avatar_id: 1,
            avatar_name: "Nino".to_string(),
            avatar_text: "なのよ".to_string(),
            image_url: "https://hoge.com/fuga".to_string(),
            color: "#f6f6f6".to_string(),
            last_update: None,
        };

        assert_eq!(
            serde_json::to_value(&avatar).unwrap(),
            json!({
                "avatarId": 1,
                "avatarName": "Nino",
                "avatarText": "なのよ",
                "imageUrl": "https://hoge.com/fuga",
                "color": "#f6f6f6"
            })
        );
    }
}
