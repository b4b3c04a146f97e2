//! # Core Types
//!
//! Platform-agnostic types shared across the resolution engine.

pub mod address;
pub mod module;
pub mod symbols;

pub use address::Address;
pub use module::ModuleHandle;
pub use symbols::{SymbolFlags, SymbolRecord};
