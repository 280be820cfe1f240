//! 愚痴（Complaint）与发帖身份（Avatar）REST 服务
//!
//! 四层结构：处理器 → 用例 → 仓储 → PostgreSQL。
//!
//! ## 模块结构
//!
//! - `models`: 实体与时间区间
//! - `repository`: 仓储 trait 及 PostgreSQL / 内存实现
//! - `usecase`: 用例层，处理器只依赖这里的 trait
//! - `validation`: 必填、数字 id、日期三条校验规则
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 服务层与 HTTP 层错误类型
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据库：sqlx (PostgreSQL)
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod usecase;
pub mod validation;

pub use error::{ApiError, Result, ServiceError};
pub use models::{Avatar, Complaint, NewAvatar, NewComplaint, TimeRange};
