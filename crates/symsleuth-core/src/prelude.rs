//! Common module for library exports

pub use crate::error::{ResolveError, Result, ERROR_PROC_NOT_FOUND};
pub use crate::resolver::Resolver;
pub use crate::source::SymbolSource;
pub use crate::table::{SymbolEntry, SymbolTable};
pub use crate::types::{Address, ModuleHandle, SymbolFlags, SymbolRecord};

#[cfg(windows)]
pub use crate::platform::windows::{sym_proc_address, DbghelpSource};
