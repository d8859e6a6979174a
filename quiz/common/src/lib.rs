//! # WhoToDate 测评 - 共享类型和接口
//!
//! 本 crate 提供兼容性测评的共享类型定义、错误类型和 Trait 接口。
//!
//! ## 功能概述
//!
//! - **类型定义**：题目、答卷、兼容性画像、双人对比结果
//! - **错误类型**：评分入口的输入校验错误
//! - **Trait 接口**：题库提供者、兼容性评分器
//!
//! ## 模块结构
//!
//! ```text
//! quiz-common
//! ├── types.rs    # 共享类型定义
//! ├── error.rs    # 错误类型
//! └── traits.rs   # Trait 接口定义
//! ```
//!
//! ## 特点
//!
//! - 纯 Rust crate，无存储
//! - no_std 兼容
//! - 启用 `std` 时支持 serde 序列化，字段名即报告存储的契约

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
