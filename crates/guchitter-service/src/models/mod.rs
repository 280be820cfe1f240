//! 领域模型
//!
//! - `Complaint`：愚痴
//! - `Avatar`：发帖身份
//! - `TimeRange`：按更新时间过滤的区间

mod avatar;
mod complaint;
mod time_range;

pub use avatar::{Avatar, NewAvatar};
pub use complaint::{Complaint, NewComplaint};
pub use time_range::{TimeRange, parse_bound};
