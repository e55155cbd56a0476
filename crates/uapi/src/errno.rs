//! errno 常量
//!
//! 取值与 `include/uapi/asm-generic/errno-base.h` 保持一致。

pub const ENOENT: i32 = 2;
pub const EBADF: i32 = 9;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const ENOTSUP: i32 = 95;
