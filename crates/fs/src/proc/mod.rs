//! ProcFS - 内核信息伪文件系统
//!
//! 提供 procfs 的节点操作表、挂载分发，以及节点共用的输出辅助。
//! 当前注册的节点：
//!
//! - `kmm`：内核堆统计（cargo feature `kmm`）

pub mod kmalloc;
#[cfg(feature = "kmm")]
pub mod kmm;
pub mod operations;
pub mod proc;
pub mod util;

#[cfg(feature = "kmm")]
pub use kmm::{KMM_NAME, KMM_OPERATIONS, KmmFile, KmmOperations};
pub use operations::ProcfsOperations;
pub use proc::{ProcFS, ProcfsEntry, ProcfsHandle};
pub use util::{LineBuf, procfs_memcpy};
