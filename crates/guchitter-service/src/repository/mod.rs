//! 数据库仓储层
//!
//! 提供实体的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - "查无记录"返回 `None`，错误通道只用于存储故障
//! - 定义 trait 接口以支持内存实现与 mock 测试

mod avatar_repo;
mod complaint_repo;
pub mod memory;
mod traits;

pub use avatar_repo::AvatarRepository;
pub use complaint_repo::ComplaintRepository;
pub use memory::{InMemoryAvatarRepository, InMemoryComplaintRepository};
pub use traits::*;
