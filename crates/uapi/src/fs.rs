//! 文件系统相关的用户空间 API 定义

/// `stat` 描述符
///
/// 只保留 procfs 节点会填写的字段：文件类型与权限、大小、块大小和块数。
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stat {
    /// 文件类型和权限位（`S_IF*` | `S_I[RWX]*`）
    pub st_mode: u32,
    /// 文件大小，单位为字节
    pub st_size: i64,
    /// 推荐的 I/O 块大小
    pub st_blksize: i64,
    /// 占用的块数
    pub st_blocks: i64,
}

impl Stat {
    /// 创建一个所有字段都为零的描述符
    pub const fn new() -> Self {
        Self {
            st_mode: 0,
            st_size: 0,
            st_blksize: 0,
            st_blocks: 0,
        }
    }
}
