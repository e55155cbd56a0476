//! 打开文件会话状态
//!
//! [`OpenFile`] 对应一次 `open()` 产生的会话：维护当前读写位置、打开标志，
//! 以及由具体文件节点在 open/dup 成功后挂接的私有数据。
//!
//! 节点的私有数据只在分配成功后才挂接到会话上，因此失败的 open/dup 不会
//! 在会话中留下半初始化的状态。

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;
use uapi::fcntl::OpenFlags;

/// 一次打开文件会话
pub struct OpenFile {
    /// 当前流偏移量
    pos: usize,
    /// 打开标志
    flags: OpenFlags,
    /// 文件节点的私有数据
    private: Option<Box<dyn Any + Send>>,
}

impl OpenFile {
    /// 以给定打开标志创建会话，偏移量为 0，尚未挂接私有数据
    pub fn new(flags: OpenFlags) -> Self {
        Self {
            pos: 0,
            flags,
            private: None,
        }
    }

    /// 当前偏移量
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 设置偏移量
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// 偏移量前进 `n` 字节
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// 打开标志
    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// 挂接私有数据，返回之前挂接的数据（如果有）
    pub fn attach_private(&mut self, data: Box<dyn Any + Send>) -> Option<Box<dyn Any + Send>> {
        self.private.replace(data)
    }

    /// 取走私有数据
    pub fn take_private(&mut self) -> Option<Box<dyn Any + Send>> {
        self.private.take()
    }

    /// 是否挂接了私有数据
    pub fn has_private(&self) -> bool {
        self.private.is_some()
    }

    /// 以具体类型借用私有数据
    pub fn private_ref<T: Any>(&self) -> Option<&T> {
        self.private.as_deref()?.downcast_ref::<T>()
    }

    /// 以具体类型可变借用私有数据
    pub fn private_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.private.as_deref_mut()?.downcast_mut::<T>()
    }
}

impl fmt::Debug for OpenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenFile")
            .field("pos", &self.pos)
            .field("flags", &self.flags)
            .field("has_private", &self.private.is_some())
            .finish()
    }
}
