//! 请求参数校验规则
//!
//! 三条规则：必填、数字 id、`YYYY-MM-DD` 日期。请求体与查询参数通过
//! `#[derive(Validate)]` 的 `custom` 属性引用这里的规则函数，字段消息写在属性里；
//! 消息在输出前按字典序排序，保证响应稳定。

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub const CODE_REQUIRED: &str = "required";
pub const CODE_NUMBER: &str = "number";
pub const CODE_DATE: &str = "date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 必填规则：去空白后不得为空
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(CODE_REQUIRED))
    } else {
        Ok(())
    }
}

/// 日期规则：空串合法；否则必须严格是 `YYYY-MM-DD` 且为真实日历日
pub fn calendar_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || parse_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new(CODE_DATE))
    }
}

/// 解析 `YYYY-MM-DD`，空串或不合法时为 `None`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// 数字 id 规则：先过必填，再要求原值可解析为整数
///
/// 两步只报告先失败的一条。
pub fn numeric_id(field: &'static str, value: &str) -> Result<i64, ValidationErrors> {
    let failure = |code: &'static str, message: String| {
        let mut errors = ValidationErrors::new();
        errors.add(
            field,
            ValidationError::new(code).with_message(Cow::Owned(message)),
        );
        errors
    };

    if not_blank(value).is_err() {
        return Err(failure(CODE_REQUIRED, format!("Param '{field}' is required.")));
    }

    value
        .parse::<i64>()
        .map_err(|_| failure(CODE_NUMBER, format!("Param '{field}' must be a 'number'.")))
}

/// 取出全部字段消息并排序
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Param '{field}' is invalid."),
                })
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
        .collect();

    messages.sort();
    messages
}
