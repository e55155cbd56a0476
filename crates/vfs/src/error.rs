//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的文件系统错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

use uapi::errno;

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    // 文件相关
    /// 文件不存在 (-ENOENT)
    NotFound,

    // 权限相关
    /// 权限被拒绝 (-EACCES)
    PermissionDenied,

    // 资源相关
    /// 内存不足 (-ENOMEM)
    OutOfMemory,
    /// 无效的文件描述符 (-EBADF)
    BadFileDescriptor,

    // 其他
    /// 操作不支持 (-ENOTSUP)
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        let errno = match self {
            FsError::NotFound => errno::ENOENT,
            FsError::BadFileDescriptor => errno::EBADF,
            FsError::OutOfMemory => errno::ENOMEM,
            FsError::PermissionDenied => errno::EACCES,
            FsError::NotSupported => errno::ENOTSUP,
        };
        -(errno as isize)
    }
}
