//! fcntl 相关的用户空间 API 定义

use bitflags::bitflags;

bitflags! {
    /// 文件打开标志
    ///
    /// 参考：include/uapi/asm-generic/fcntl.h
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只读模式 (O_RDONLY)
        const O_RDONLY    = 0o0;

        /// 只写模式 (O_WRONLY)
        const O_WRONLY    = 0o1;

        /// 读写模式 (O_RDWR)
        const O_RDWR      = 0o2;

        /// 访问模式掩码 (O_ACCMODE)
        const O_ACCMODE   = 0o3;

        /// 文件不存在则创建 (O_CREAT)
        const O_CREAT     = 0o100;

        /// 与 O_CREAT 配合，文件必须不存在 (O_EXCL)
        const O_EXCL      = 0o200;

        /// 截断文件到 0 (O_TRUNC)
        const O_TRUNC     = 0o1000;

        /// 追加模式 (O_APPEND)
        const O_APPEND    = 0o2000;

        /// 非阻塞 I/O (O_NONBLOCK)
        const O_NONBLOCK  = 0o4000;

        /// 必须是目录 (O_DIRECTORY)
        const O_DIRECTORY = 0o200000;

        /// exec 时关闭 (O_CLOEXEC)
        const O_CLOEXEC   = 0o2000000;
    }
}

impl OpenFlags {
    /// 访问模式字段（O_RDONLY / O_WRONLY / O_RDWR）
    pub fn access_mode(&self) -> u32 {
        self.bits() & Self::O_ACCMODE.bits()
    }

    /// 检查是否可读（O_RDONLY 或 O_RDWR）
    pub fn readable(&self) -> bool {
        let mode = self.access_mode();
        mode == Self::O_RDONLY.bits() || mode == Self::O_RDWR.bits()
    }

    /// 检查是否可写（O_WRONLY 或 O_RDWR）
    pub fn writable(&self) -> bool {
        let mode = self.access_mode();
        mode == Self::O_WRONLY.bits() || mode == Self::O_RDWR.bits()
    }
}
