//! 测试支持 crate
//!
//! 提供 Mock 实现和测试工具。依赖标准库，只作为 dev-dependency 使用。

pub mod mock;
