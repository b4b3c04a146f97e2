//! # symsleuth-core
//!
//! Export-table-free function address resolution from debug symbols.
//!
//! This crate resolves exported-function addresses from a loaded binary
//! image by name using the module's debug-symbol information, for callers
//! whose export table is absent, stripped, hooked, or otherwise
//! untrustworthy. The pieces:
//!
//! - [`table::SymbolTable`]: per-module name-to-address mapping, built once
//!   from a single enumeration pass
//! - [`resolver::Resolver`]: the cache that owns one table per module and
//!   performs case-insensitive lookups against them
//! - [`source::SymbolSource`]: the seam to the platform's symbol
//!   enumeration service
//!
//! ## Platform Support
//!
//! - **Windows**: [`platform::windows::DbghelpSource`] wraps the dbghelp
//!   symbol engine (`SymInitialize`, `SymEnumSymbols`)
//! - Other platforms can implement [`source::SymbolSource`] over their own
//!   symbol services; the engine itself is portable
//!
//! ## Why unsafe code is needed
//!
//! The Windows source calls dbghelp through raw FFI, including a C callback
//! that re-enters Rust once per symbol. Those calls are inherently unsafe;
//! they are confined to `platform::windows` and wrapped in a safe
//! [`source::SymbolSource`] implementation.

#![allow(unsafe_code)] // Required for the dbghelp FFI in platform::windows

pub mod error;
pub mod platform;
pub mod prelude;
pub mod resolver;
pub mod source;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use error::{ResolveError, Result};
pub use resolver::Resolver;
pub use source::SymbolSource;
pub use table::SymbolTable;
pub use types::{Address, ModuleHandle};
