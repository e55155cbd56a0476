//! FS 相关操作的 Mock 实现
//!
//! 注意：这里不直接依赖 `fs` crate（避免循环依赖）。
//! `fs` crate 在 `cfg(test)` 下为这些类型实现其 trait（例如 `FsOps`）。
//!
//! 统计快照和查询计数保存在线程局部存储中：每个测试在自己的线程里运行，
//! 互不干扰，而全局只需注册一次 [`MOCK_FS_OPS`]。

use std::cell::Cell;

use uapi::malloc::MallInfo;

/// Mock 堆的默认统计：128 KiB arena，已用 48 KiB，空闲 80 KiB，最大空闲块 64 KiB
pub const DEFAULT_MALLINFO: MallInfo = MallInfo::new(131072, 49152, 81920, 65536);

thread_local! {
    static MALLINFO: Cell<MallInfo> = const { Cell::new(DEFAULT_MALLINFO) };
    static MALLINFO_QUERIES: Cell<usize> = const { Cell::new(0) };
}

/// Mock 的 FS 运行时操作
pub struct MockFsOps;

impl MockFsOps {
    pub const fn new() -> Self {
        Self
    }

    /// 返回当前线程的统计快照，并记录一次查询
    pub fn kmm_mallinfo(&self) -> MallInfo {
        MALLINFO_QUERIES.with(|q| q.set(q.get() + 1));
        MALLINFO.with(Cell::get)
    }

    /// 设置当前线程后续查询返回的统计快照
    pub fn set_mallinfo(&self, info: MallInfo) {
        MALLINFO.with(|m| m.set(info));
    }

    /// 当前线程累计的查询次数
    pub fn mallinfo_queries(&self) -> usize {
        MALLINFO_QUERIES.with(Cell::get)
    }

    /// 恢复默认统计并清零查询计数
    pub fn reset(&self) {
        MALLINFO.with(|m| m.set(DEFAULT_MALLINFO));
        MALLINFO_QUERIES.with(|q| q.set(0));
    }
}

impl Default for MockFsOps {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局 Mock 实例
pub static MOCK_FS_OPS: MockFsOps = MockFsOps::new();
