//! 文件类型与权限位

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// 文件权限和类型（与 POSIX 兼容）
    pub struct FileMode: u32 {
        // 文件类型掩码
        /// 文件类型掩码
        const S_IFMT   = 0o170000;
        /// 普通文件
        const S_IFREG  = 0o100000;

        // 用户权限
        /// 用户读
        const S_IRUSR  = 0o400;
        /// 用户写
        const S_IWUSR  = 0o200;
        /// 用户执行
        const S_IXUSR  = 0o100;

        // 组权限
        /// 组读
        const S_IRGRP  = 0o040;
        /// 组写
        const S_IWGRP  = 0o020;
        /// 组执行
        const S_IXGRP  = 0o010;

        // 其他用户权限
        /// 其他读
        const S_IROTH  = 0o004;
        /// 其他写
        const S_IWOTH  = 0o002;
        /// 其他执行
        const S_IXOTH  = 0o001;
    }
}

impl FileMode {
    /// 所有主体的读权限（r--r--r--）
    pub const READ_ALL: FileMode = FileMode::S_IRUSR
        .union(FileMode::S_IRGRP)
        .union(FileMode::S_IROTH);

    /// 文件类型部分
    pub fn file_type(&self) -> FileMode {
        *self & FileMode::S_IFMT
    }

    /// 权限位部分（低 9 位）
    pub fn permissions(&self) -> u32 {
        self.bits() & 0o777
    }

    /// 是否为普通文件
    pub fn is_regular(&self) -> bool {
        self.file_type() == FileMode::S_IFREG
    }
}
