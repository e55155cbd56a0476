//! Procfs 私有数据的可失败分配
//!
//! 打开文件的私有数据在 open 时零初始化分配、在 dup 时按成员复制分配。
//! 分配失败以 [`FsError::OutOfMemory`] 返回给调用者，而不是终止内核。

use alloc::alloc::{alloc, alloc_zeroed};
use alloc::boxed::Box;
use core::alloc::Layout;

use vfs::FsError;

/// 全零位模式是合法值的类型
///
/// # Safety
/// 实现者必须保证类型的全零字节表示是一个有效值，且类型不是零大小类型。
pub unsafe trait ZeroInit: Sized {}

/// 分配一块零初始化的 `T`
pub fn kmm_zalloc<T: ZeroInit>() -> Result<Box<T>, FsError> {
    let layout = Layout::new::<T>();
    debug_assert!(layout.size() != 0);
    // SAFETY: ZeroInit 保证 T 不是零大小类型
    let ptr = unsafe { alloc_zeroed(layout) } as *mut T;
    if ptr.is_null() {
        return Err(FsError::OutOfMemory);
    }
    // SAFETY: ptr 由全局分配器按 T 的布局分配，且 ZeroInit 保证全零是有效的 T
    Ok(unsafe { Box::from_raw(ptr) })
}

/// 分配一块新的 `T`，并按成员复制 `src`
pub fn kmm_dup<T: Copy>(src: &T) -> Result<Box<T>, FsError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(*src));
    }
    // SAFETY: layout 大小非零
    let ptr = unsafe { alloc(layout) } as *mut T;
    if ptr.is_null() {
        return Err(FsError::OutOfMemory);
    }
    // SAFETY: ptr 非空、按 T 对齐且未初始化，写入后成为有效的 T
    unsafe {
        ptr.write(*src);
        Ok(Box::from_raw(ptr))
    }
}
