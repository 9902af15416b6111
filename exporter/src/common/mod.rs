//! 共通型定義
//!
//! Pingdom APIの型とエラー型

pub mod error;
pub mod types;
