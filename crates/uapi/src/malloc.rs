//! 堆分配器统计信息
//!
//! 对应 NuttX 的 `struct mallinfo`，由 `kmm_mallinfo()` 返回。所有字段都以字节
//! （分配器的原生单位）或块数计。

/// 堆分配器统计快照
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MallInfo {
    /// 堆（arena）总大小，单位为字节
    pub arena: usize,
    /// 空闲块数量
    pub ordblks: usize,
    /// 已分配块数量
    pub aordblks: usize,
    /// 最大空闲块的大小，单位为字节
    pub mxordblk: usize,
    /// 已使用字节数
    pub uordblks: usize,
    /// 空闲字节数
    pub fordblks: usize,
}

impl MallInfo {
    /// 由四项主要统计值构造快照，块计数置零
    pub const fn new(arena: usize, uordblks: usize, fordblks: usize, mxordblk: usize) -> Self {
        Self {
            arena,
            ordblks: 0,
            aordblks: 0,
            mxordblk,
            uordblks,
            fordblks,
        }
    }
}
