//! 内核虚拟文件系统层
//!
//! 此 crate 提供 procfs 节点与上层分发框架之间共享的会话层类型：
//!
//! - [`FsError`] - 与 POSIX errno 对应的错误类型
//! - [`FileMode`] - 文件类型与权限位
//! - [`OpenFile`] - 一次打开文件的会话状态（偏移量、打开标志、节点私有数据）

#![no_std]

extern crate alloc;

pub mod error;
mod file;
mod mode;

// Re-export error
pub use error::FsError;

// Re-export file
pub use file::OpenFile;

// Re-export mode
pub use mode::FileMode;

// Re-export uapi types for convenience
pub use uapi::fcntl::OpenFlags;
pub use uapi::fs::Stat;
