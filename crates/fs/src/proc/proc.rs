//! Procfs 挂载层
//!
//! 按相对路径的第一个分量在静态注册表中查找节点，把 open/stat/opendir 分发给
//! 节点的 [`ProcfsOperations`]。完整的相对路径原样交给节点，由节点自己做名字校验。

use core::fmt;

use uapi::fs::Stat;
use vfs::{FileMode, FsError, OpenFile, OpenFlags};

use crate::proc::operations::ProcfsOperations;

/// 注册表中的一个节点
pub struct ProcfsEntry {
    /// 节点名（相对路径的第一个分量）
    pub name: &'static str,
    /// 节点操作表
    pub ops: &'static dyn ProcfsOperations,
}

impl ProcfsEntry {
    /// 创建注册项
    pub const fn new(name: &'static str, ops: &'static dyn ProcfsOperations) -> Self {
        Self { name, ops }
    }
}

impl fmt::Debug for ProcfsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcfsEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "kmm")]
static DEFAULT_ENTRIES: [ProcfsEntry; 1] = [ProcfsEntry::new(
    crate::proc::kmm::KMM_NAME,
    &crate::proc::kmm::KMM_OPERATIONS,
)];

#[cfg(not(feature = "kmm"))]
static DEFAULT_ENTRIES: [ProcfsEntry; 0] = [];

/// ProcFS 挂载实例
#[derive(Debug, Clone, Copy)]
pub struct ProcFS {
    entries: &'static [ProcfsEntry],
}

impl ProcFS {
    /// 以给定注册表创建挂载实例
    pub const fn new(entries: &'static [ProcfsEntry]) -> Self {
        Self { entries }
    }

    /// 以内核默认注册表创建挂载实例
    pub fn with_default_entries() -> Self {
        Self::new(Self::default_entries())
    }

    /// 内核默认注册表（由 cargo feature 决定包含哪些节点）
    pub fn default_entries() -> &'static [ProcfsEntry] {
        &DEFAULT_ENTRIES
    }

    /// 已注册的节点
    pub fn entries(&self) -> &'static [ProcfsEntry] {
        self.entries
    }

    fn find_entry<'a>(&self, relpath: &'a str) -> Result<(&'static ProcfsEntry, &'a str), FsError> {
        let relpath = relpath.trim_start_matches('/');
        let name = relpath.split_once('/').map_or(relpath, |(head, _)| head);

        self.entries
            .iter()
            .find(|entry| !name.is_empty() && entry.name == name)
            .map(|entry| (entry, relpath))
            .ok_or_else(|| {
                log::debug!("procfs: no entry for '{}'", relpath);
                FsError::NotFound
            })
    }

    /// 打开 `relpath`
    pub fn open(
        &self,
        relpath: &str,
        oflags: OpenFlags,
        mode: FileMode,
    ) -> Result<ProcfsHandle, FsError> {
        let (entry, relpath) = self.find_entry(relpath)?;
        let mut file = OpenFile::new(oflags);
        entry.ops.open(&mut file, relpath, oflags, mode)?;
        Ok(ProcfsHandle { entry, file })
    }

    /// 查询 `relpath` 的元数据
    pub fn stat(&self, relpath: &str) -> Result<Stat, FsError> {
        let (entry, relpath) = self.find_entry(relpath)?;
        entry.ops.stat(relpath)
    }

    /// 打开目录
    pub fn opendir(&self, relpath: &str) -> Result<(), FsError> {
        let (entry, relpath) = self.find_entry(relpath)?;
        entry.ops.opendir(relpath)
    }
}

impl Default for ProcFS {
    fn default() -> Self {
        Self::with_default_entries()
    }
}

/// 一个打开的 procfs 文件
///
/// 持有会话状态和打开它的节点。[`ProcfsHandle::close`] 消费句柄，
/// 未关闭就丢弃的句柄同样会释放节点私有数据。
#[derive(Debug)]
pub struct ProcfsHandle {
    entry: &'static ProcfsEntry,
    file: OpenFile,
}

impl ProcfsHandle {
    /// 打开此文件的节点名
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// 会话状态
    pub fn file(&self) -> &OpenFile {
        &self.file
    }

    /// 当前流偏移量
    pub fn pos(&self) -> usize {
        self.file.pos()
    }

    /// 设置流偏移量（SEEK_SET）
    pub fn seek(&mut self, pos: usize) {
        self.file.set_pos(pos);
    }

    /// 从当前偏移量读取
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        self.entry.ops.read(&mut self.file, buf)
    }

    /// 写入
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, FsError> {
        self.entry.ops.write(&mut self.file, buf)
    }

    /// 复制句柄：新句柄继承打开标志和偏移量，私有数据由节点复制
    pub fn dup(&self) -> Result<ProcfsHandle, FsError> {
        let mut file = OpenFile::new(self.file.flags());
        file.set_pos(self.file.pos());
        self.entry.ops.dup(&self.file, &mut file)?;
        Ok(ProcfsHandle {
            entry: self.entry,
            file,
        })
    }

    /// 关闭句柄
    pub fn close(mut self) -> Result<(), FsError> {
        self.entry.ops.close(&mut self.file)
    }
}
