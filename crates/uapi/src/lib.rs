//! 与用户空间共用定义和声明
//!
//! 包含 procfs 节点与系统调用层之间共享的常量和结构体：打开标志、errno、
//! `stat` 描述符以及堆分配器统计信息。

#![no_std]
#![allow(dead_code)]
#![allow(missing_docs)]

pub mod errno;
pub mod fcntl;
pub mod fs;
pub mod malloc;
