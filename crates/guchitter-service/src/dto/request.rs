//! 请求 DTO 定义
//!
//! 路径参数、查询参数与请求体。校验规则见 `crate::validation`。

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::{NewAvatar, NewComplaint, TimeRange};
use crate::validation::{numeric_id, parse_date};

/// 路径参数 `{id}`
///
/// 以字符串接收，由校验规则决定是"必填"还是"非数字"。
#[derive(Debug, Clone, Deserialize)]
pub struct IdParam {
    pub id: String,
}

impl IdParam {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 校验并解析出整数 id
    pub fn parse(&self) -> Result<i64, ValidationErrors> {
        numeric_id("id", &self.id)
    }
}

/// 时间区间查询 `?from=&to=`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BetweenTimeQuery {
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::calendar_date",
        message = "Param 'from' must be a 'YYYY-MM-DD'."
    ))]
    pub from: String,
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::calendar_date",
        message = "Param 'to' must be a 'YYYY-MM-DD'."
    ))]
    pub to: String,
}

impl BetweenTimeQuery {
    /// 校验并转换为区间，两端错误一并返回
    pub fn time_range(&self) -> Result<TimeRange, ValidationErrors> {
        self.validate()?;
        Ok(TimeRange::from_dates(
            parse_date(&self.from),
            parse_date(&self.to),
        ))
    }
}

/// 创建愚痴请求
///
/// 请求体里的 `complaintId` 会被忽略，id 由存储层分配。
/// 缺省字段不在反序列化阶段报错，统一交给校验规则累积。
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Param 'complaintText' is required."
    ))]
    pub complaint_text: String,
    #[serde(default)]
    #[validate(required(message = "Param 'avatarId' is required."))]
    pub avatar_id: Option<i64>,
}

impl From<CreateComplaintRequest> for NewComplaint {
    fn from(req: CreateComplaintRequest) -> Self {
        // 校验通过后 avatar_id 必有值
        NewComplaint::new(req.complaint_text, req.avatar_id.unwrap_or_default())
    }
}

/// 创建 Avatar 请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvatarRequest {
    #[serde(default)]
    #[validate(required(message = "Param 'avatarId' is required."))]
    pub avatar_id: Option<i64>,
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Param 'avatarName' is required."
    ))]
    pub avatar_name: String,
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Param 'avatarText' is required."
    ))]
    pub avatar_text: String,
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Param 'imageUrl' is required."
    ))]
    pub image_url: String,
    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::not_blank",
        message = "Param 'color' is required."
    ))]
    pub color: String,
}

impl From<CreateAvatarRequest> for NewAvatar {
    fn from(req: CreateAvatarRequest) -> Self {
        Self {
            avatar_id: req.avatar_id.unwrap_or_default(),
            avatar_name: req.avatar_name,
            avatar_text: req.avatar_text,
            image_url: req.image_url,
            color: req.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::messages;
    use chrono::NaiveDate;

    #[test]
    fn test_id_param() {
        assert_eq!(IdParam::new("1").parse().unwrap(), 1);
        assert_eq!(
            messages(&IdParam::new(" ").parse().unwrap_err()),
            vec!["Param 'id' is required."]
        );
        assert_eq!(
            messages(&IdParam::new("あ").parse().unwrap_err()),
            vec!["Param 'id' must be a 'number'."]
        );
    }

    #[test]
    fn test_between_time_query_both_invalid() {
        let query = BetweenTimeQuery {
            from: "2022-01-32".to_string(),
            to: "2022-01-011".to_string(),
        };

        assert_eq!(
            messages(&query.validate().unwrap_err()),
            vec![
                "Param 'from' must be a 'YYYY-MM-DD'.",
                "Param 'to' must be a 'YYYY-MM-DD'.",
            ]
        );
    }

    #[test]
    fn test_between_time_query_empty_is_unbounded() {
        let range = BetweenTimeQuery::default().time_range().unwrap();
        assert_eq!(range, TimeRange::unbounded());
    }

    #[test]
    fn test_between_time_query_one_side() {
        let query = BetweenTimeQuery {
            from: String::new(),
            to: "2022-11-28".to_string(),
        };
        let range = query.time_range().unwrap();
        assert_eq!(range.from, None);
        assert_eq!(
            range.to,
            NaiveDate::from_ymd_opt(2022, 11, 28).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_create_complaint_request() {
        let req: CreateComplaintRequest =
            serde_json::from_str(r#"{"complaintId": 9, "complaintText": "", "avatarId": 1}"#)
                .unwrap();

        assert_eq!(
            messages(&req.validate().unwrap_err()),
            vec!["Param 'complaintText' is required."]
        );
    }

    #[test]
    fn test_create_avatar_request_accumulates() {
        let req: CreateAvatarRequest =
            serde_json::from_str(r##"{"avatarId": 1, "avatarName": " ", "color": "#ffffff"}"##)
                .unwrap();

        assert_eq!(
            messages(&req.validate().unwrap_err()),
            vec![
                "Param 'avatarName' is required.",
                "Param 'avatarText' is required.",
                "Param 'imageUrl' is required.",
            ]
        );
    }

    #[test]
    fn test_create_complaint_request_missing_avatar_id() {
        let req: CreateComplaintRequest =
            serde_json::from_str(r#"{"complaintText": ""}"#).unwrap();

        assert_eq!(req.avatar_id, None);
        assert_eq!(
            messages(&req.validate().unwrap_err()),
            vec![
                "Param 'avatarId' is required.",
                "Param 'complaintText' is required.",
            ]
        );
    }

    #[test]
    fn test_create_avatar_request_missing_avatar_id() {
        let req: CreateAvatarRequest = serde_json::from_str(
            r##"{"avatarId": null, "avatarName": "Nino", "avatarText": "なのよ", "imageUrl": "https://hoge.com/fuga", "color": "#f6f6f6"}"##,
        )
        .unwrap();

        assert_eq!(
            messages(&req.validate().unwrap_err()),
            vec!["Param 'avatarId' is required."]
        );
    }

    #[test]
    fn test_create_avatar_request_into_new_avatar() {
        let req = CreateAvatarRequest {
            avatar_id: Some(1),
            avatar_name: "Nino".to_string(),
            avatar_text: "なのよ".to_string(),
            image_url: "https://hoge.com/fuga".to_string(),
            color: "#f6f6f6".to_string(),
        };
        assert!(req.validate().is_ok());

        let new_avatar: NewAvatar = req.into();
        assert_eq!(new_avatar.avatar_id, 1);
        assert_eq!(new_avatar.avatar_name, "Nino");
    }
}
