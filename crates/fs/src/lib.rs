//! # 文件系统模块 (FS)
//!
//! 本模块提供 procfs 伪文件系统的框架部分和具体节点，通过 [`FsOps`] 从内核获取运行时信息。
//!
//! ## 节点
//!
//! - **[kmm](proc::kmm)**: 内核堆统计（总大小、已用、空闲、最大空闲块）

#![no_std]
#![doc = "文件系统实现"]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod ops;
pub mod proc;


pub use ops::{FsOps, fs_ops, register_fs_ops};
pub use proc::{ProcFS, ProcfsEntry, ProcfsHandle, ProcfsOperations};
