//! DTO 模块
//!
//! 包含所有请求和响应的数据传输对象

pub mod request;
pub mod response;

pub use request::{BetweenTimeQuery, CreateAvatarRequest, CreateComplaintRequest, IdParam};
pub use response::{ErrorResponse, HealthResponse};
