//! Procfs 节点操作表

use uapi::fs::Stat;
use vfs::{FileMode, FsError, OpenFile, OpenFlags};

/// Procfs 节点操作表
///
/// 由 [`ProcFS`](crate::proc::ProcFS) 按挂载名分发调用。每个节点只需实现
/// open/close/read/dup/stat；写入和目录相关操作默认报告为不支持。
///
/// 节点的每打开文件状态通过 [`OpenFile`] 的私有数据槽保存，只有在 open/dup
/// 成功后才挂接。同一个 [`OpenFile`] 上的调用由调用者串行化，节点内部不加锁。
pub trait ProcfsOperations: Send + Sync {
    /// 打开 `relpath`，成功时在 `file` 上挂接节点私有数据
    fn open(
        &self,
        file: &mut OpenFile,
        relpath: &str,
        oflags: OpenFlags,
        mode: FileMode,
    ) -> Result<(), FsError>;

    /// 关闭文件，释放节点私有数据
    fn close(&self, file: &mut OpenFile) -> Result<(), FsError>;

    /// 从当前偏移量读取数据，并推进偏移量
    ///
    /// 返回 `Ok(0)` 表示已到达流末尾。
    fn read(&self, file: &mut OpenFile, buf: &mut [u8]) -> Result<usize, FsError>;

    /// 写入数据（可选方法）
    fn write(&self, _file: &mut OpenFile, _buf: &[u8]) -> Result<usize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 将 `oldp` 的私有数据复制到 `newp`
    fn dup(&self, oldp: &OpenFile, newp: &mut OpenFile) -> Result<(), FsError>;

    /// 打开目录（可选方法）
    fn opendir(&self, _relpath: &str) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 读取下一个目录项（可选方法）
    fn readdir(&self) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 重置目录读取位置（可选方法）
    fn rewinddir(&self) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 关闭目录（可选方法）
    fn closedir(&self) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 查询 `relpath` 的元数据
    fn stat(&self, relpath: &str) -> Result<Stat, FsError>;
}
