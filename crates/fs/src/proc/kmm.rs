//! /proc/kmm - 内核堆统计节点
//!
//! 只读的虚拟文件，每次读取时按当前内核堆统计实时生成两行文本：
//!
//! ```text
//!              total       used       free    largest
//! Mem:        131072      49152      81920      65536
//! ```
//!
//! 节点没有后备存储。文档由表头行和数据行两段组成，读取时按调用者的流偏移量
//! 依次对两行调用 [`procfs_memcpy`]，因此任意分块、任意偏移量的读取都能续读。
//! 数据行在每次需要输出它的 `read` 中重新查询统计信息，跨调用不保证快照一致。

use core::fmt::Write;

use uapi::fs::Stat;
use uapi::malloc::MallInfo;
use vfs::{FileMode, FsError, OpenFile, OpenFlags};

use crate::ops::fs_ops;
use crate::proc::kmalloc::{ZeroInit, kmm_dup, kmm_zalloc};
use crate::proc::operations::ProcfsOperations;
use crate::proc::util::{LineBuf, procfs_memcpy};

/// 节点在 procfs 中的名字，也是唯一可接受的相对路径
pub const KMM_NAME: &str = "kmm";

/// 数据行每个数值字段的宽度
pub const KMM_FIELD_WIDTH: usize = 11;

/// 数据行标签，与表头的标签列对齐
pub const KMM_LABEL: &str = "Mem:   ";

/// 固定的表头行
pub const KMM_HEADER: &str = "             total       used       free    largest\n";

const USIZE_MAX_DIGITS: usize = usize::MAX.ilog10() as usize + 1;

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

/// 行缓冲区容量：最宽的数据行（数值位数超过字段宽度时字段会被撑宽）
pub const KMM_LINELEN: usize =
    KMM_LABEL.len() + 4 * max(KMM_FIELD_WIDTH, USIZE_MAX_DIGITS) + 1;

const _: () = assert!(KMM_HEADER.len() <= KMM_LINELEN);

/// 一个打开的 kmm 文件
///
/// 行缓冲区只在单次 `read` 调用内有效：每次调用都会重置并逐行重新填充。
#[derive(Debug, Clone, Copy, Default)]
pub struct KmmFile {
    line: LineBuf<KMM_LINELEN>,
}

// SAFETY: LineBuf 由整数、bool 和字节数组组成，全零表示空缓冲区
unsafe impl ZeroInit for KmmFile {}

impl KmmFile {
    /// 当前暂存行的有效字节数
    pub fn linesize(&self) -> usize {
        self.line.len()
    }

    /// 当前暂存行的内容
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// 从文档偏移量 `offset` 开始，把两行文档中能放下的部分写入 `buf`
    ///
    /// 表头行之后如果 `buf` 还有剩余空间，才调用 `query` 获取统计快照并生成数据行。
    /// 返回写入的字节数；`offset` 不小于文档长度时返回 0。
    pub fn read_document<F>(&mut self, offset: usize, buf: &mut [u8], query: F) -> usize
    where
        F: FnOnce() -> MallInfo,
    {
        let mut offset = offset;

        // 第一行是表头
        self.line.clear();
        let _ = self.line.write_str(KMM_HEADER);
        let mut totalsize = procfs_memcpy(self.line.as_bytes(), buf, &mut offset);

        if totalsize < buf.len() {
            // 第二行是内存数据
            let mem = query();
            self.render_data_line(&mem);
            totalsize += procfs_memcpy(self.line.as_bytes(), &mut buf[totalsize..], &mut offset);
        }

        totalsize
    }

    fn render_data_line(&mut self, mem: &MallInfo) {
        self.line.clear();
        let _ = writeln!(
            self.line,
            "{}{:>w$}{:>w$}{:>w$}{:>w$}",
            KMM_LABEL,
            mem.arena,
            mem.uordblks,
            mem.fordblks,
            mem.mxordblk,
            w = KMM_FIELD_WIDTH
        );
        if self.line.is_truncated() {
            log::warn!("kmm: data line truncated to {} bytes", self.line.len());
        }
    }
}

/// kmm 节点的操作表
pub struct KmmOperations;

/// 注册到 procfs 的 kmm 操作表实例
pub static KMM_OPERATIONS: KmmOperations = KmmOperations;

impl ProcfsOperations for KmmOperations {
    fn open(
        &self,
        file: &mut OpenFile,
        relpath: &str,
        oflags: OpenFlags,
        _mode: FileMode,
    ) -> Result<(), FsError> {
        log::debug!("kmm: open '{}'", relpath);

        // procfs 只读，任何带写权限的打开都被拒绝
        if oflags.writable() || !oflags.readable() {
            log::warn!("kmm: only O_RDONLY supported, got {:#o}", oflags.bits());
            return Err(FsError::PermissionDenied);
        }

        if relpath != KMM_NAME {
            log::warn!("kmm: relpath is '{}'", relpath);
            return Err(FsError::NotFound);
        }

        let procfile = kmm_zalloc::<KmmFile>().inspect_err(|_| {
            log::warn!("kmm: failed to allocate file attributes");
        })?;

        file.attach_private(procfile);
        Ok(())
    }

    fn close(&self, file: &mut OpenFile) -> Result<(), FsError> {
        log::debug!("kmm: close");
        // 不是 kmm 的私有数据时保持会话原样
        if file.private_ref::<KmmFile>().is_none() {
            return Err(FsError::BadFileDescriptor);
        }
        drop(file.take_private());
        Ok(())
    }

    fn read(&self, file: &mut OpenFile, buf: &mut [u8]) -> Result<usize, FsError> {
        log::debug!("kmm: read buflen={} pos={}", buf.len(), file.pos());

        if buf.is_empty() {
            return Ok(0);
        }

        let offset = file.pos();
        let procfile = file
            .private_mut::<KmmFile>()
            .ok_or(FsError::BadFileDescriptor)?;
        let totalsize = procfile.read_document(offset, buf, || fs_ops().kmm_mallinfo());

        file.advance(totalsize);
        Ok(totalsize)
    }

    fn dup(&self, oldp: &OpenFile, newp: &mut OpenFile) -> Result<(), FsError> {
        log::debug!("kmm: dup");

        let oldattr = oldp
            .private_ref::<KmmFile>()
            .ok_or(FsError::BadFileDescriptor)?;
        let newattr = kmm_dup(oldattr).inspect_err(|_| {
            log::warn!("kmm: failed to allocate file attributes");
        })?;

        newp.attach_private(newattr);
        Ok(())
    }

    fn stat(&self, relpath: &str) -> Result<Stat, FsError> {
        if relpath != KMM_NAME {
            log::warn!("kmm: relpath is '{}'", relpath);
            return Err(FsError::NotFound);
        }

        // 内容按需生成，不预先计算大小
        Ok(Stat {
            st_mode: (FileMode::S_IFREG | FileMode::READ_ALL).bits(),
            st_size: 0,
            st_blksize: 0,
            st_blocks: 0,
        })
    }
}
