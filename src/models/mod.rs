//! Models module
//!
//! Data models shared by the evaluator, the calculator session and the
//! tutor boundary.

pub mod core;
pub mod expr;
pub mod settings;

// Re-export commonly used types
pub use core::*;
pub use expr::{BinaryOp, Constant, Expr, Function, UnaryOp};
pub use settings::Settings;
