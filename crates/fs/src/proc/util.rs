//! Procfs 节点共用的输出辅助

use core::fmt;

/// 按文档偏移量把一行内容复制到目标缓冲区
///
/// `offset` 是整个生成文档中还需要跳过的字节数：
///
/// - 如果 `offset >= src.len()`，整行都在已读取的范围内，`offset` 减去行长，返回 0；
/// - 否则从 `src[offset..]` 开始复制，最多填满 `dest`，`offset` 清零，返回复制的字节数。
///
/// 对生成文档的每一行依次调用，即可在多次 `read` 之间从任意偏移量续读。
pub fn procfs_memcpy(src: &[u8], dest: &mut [u8], offset: &mut usize) -> usize {
    let lnoffset = *offset;
    if lnoffset >= src.len() {
        *offset = lnoffset - src.len();
        return 0;
    }

    let copysize = (src.len() - lnoffset).min(dest.len());
    dest[..copysize].copy_from_slice(&src[lnoffset..lnoffset + copysize]);
    *offset = 0;
    copysize
}

/// 固定容量的行缓冲区
///
/// 通过 [`core::fmt::Write`] 格式化写入，超出容量的部分被丢弃并记录为截断，
/// 有效长度永远不超过 `N`。
#[derive(Clone, Copy)]
pub struct LineBuf<const N: usize> {
    len: usize,
    truncated: bool,
    buf: [u8; N],
}

impl<const N: usize> LineBuf<N> {
    /// 创建空缓冲区
    pub const fn new() -> Self {
        Self {
            len: 0,
            truncated: false,
            buf: [0; N],
        }
    }

    /// 缓冲区容量
    pub const fn capacity(&self) -> usize {
        N
    }

    /// 有效字节数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 上一次格式化是否发生了截断
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// 清空内容
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// 有效内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> Default for LineBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let room = N - self.len;
        let n = bytes.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        if n < bytes.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for LineBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuf")
            .field("len", &self.len)
            .field("truncated", &self.truncated)
            .field("line", &core::str::from_utf8(self.as_bytes()))
            .finish()
    }
}
