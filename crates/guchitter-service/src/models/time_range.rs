//! 更新时间区间
//!
//! `[from, to]` 闭区间，任一端缺省即该侧不设界。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 按 `last_update` 过滤的时间区间
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl TimeRange {
    /// 由日期构造，日期取当天 00:00:00
    pub fn from_dates(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.map(|d| d.and_time(NaiveTime::MIN)),
            to: to.map(|d| d.and_time(NaiveTime::MIN)),
        }
    }

    /// 不设界的区间，匹配全部记录
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// 从查询字符串解析
    ///
    /// 空串表示不设界；接受 `YYYY-MM-DD`（当天 00:00:00）与 `YYYY-MM-DD HH:MM:SS`。
    pub fn parse(from: &str, to: &str) -> Result<Self, ParseError> {
        Ok(Self {
            from: parse_bound(from)?,
            to: parse_bound(to)?,
        })
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.from.is_none_or(|from| timestamp >= from) && self.to.is_none_or(|to| timestamp <= to)
    }
}

/// 解析单侧边界
pub fn parse_bound(value: &str) -> Result<Option<NaiveDateTime>, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        return Ok(Some(datetime));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map(|date| Some(date.and_time(NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).unwrap()
    }

    #[test]
    fn test_empty_bounds_are_unbounded() {
        let range = TimeRange::parse("", "").unwrap();
        assert_eq!(range, TimeRange::unbounded());
        assert!(range.contains(at("1970-01-01 00:00:00")));
    }

    #[test]
    fn test_date_bound_is_midnight() {
        let range = TimeRange::parse("2022-11-27", "2022-11-28").unwrap();
        assert_eq!(range.from, Some(at("2022-11-27 00:00:00")));
        assert_eq!(range.to, Some(at("2022-11-28 00:00:00")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = TimeRange::parse("2023-05-06 23:00:01", "2023-05-06 23:00:02").unwrap();
        assert!(!range.contains(at("2023-05-06 23:00:00")));
        assert!(range.contains(at("2023-05-06 23:00:01")));
        assert!(range.contains(at("2023-05-06 23:00:02")));
        assert!(!range.contains(at("2023-05-06 23:00:03")));
    }

    #[test]
    fn test_from_dates() {
        let range = TimeRange::from_dates(NaiveDate::from_ymd_opt(2022, 11, 27), None);
        assert_eq!(range, TimeRange::parse("2022-11-27", "").unwrap());
    }

    #[test]
    fn test_open_upper_bound() {
        let range = TimeRange::parse("2023-05-06", "").unwrap();
        assert!(range.to.is_none());
        assert!(range.contains(at("2099-01-01 00:00:00")));
        assert!(!range.contains(at("2023-05-05 23:59:59")));
    }

    #[test]
    fn test_invalid_bound() {
        assert!(TimeRange::parse("2022-01-32", "").is_err());
        assert!(TimeRange::parse("", "yesterday").is_err());
    }
}
