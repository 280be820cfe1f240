//! 用例层
//!
//! 每个仓储操作对应一个用例方法，处理器只依赖这里的 trait。

mod avatar_usecase;
mod complaint_usecase;

pub use avatar_usecase::{AvatarUseCase, AvatarUseCaseTrait};
pub use complaint_usecase::{ComplaintUseCase, ComplaintUseCaseTrait};

#[cfg(test)]
pub use avatar_usecase::MockAvatarUseCaseTrait;
#[cfg(test)]
pub use complaint_usecase::MockComplaintUseCaseTrait;
