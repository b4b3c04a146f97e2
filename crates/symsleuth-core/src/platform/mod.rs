//! # Platform-Specific Symbol Sources
//!
//! This module contains platform-specific [`SymbolSource`] implementations.
//!
//! Each platform gets its own submodule wrapping that platform's native
//! debug-symbol service:
//!
//! - **Windows**: Uses the dbghelp symbol engine (`SymInitialize`,
//!   `SymEnumSymbols`)
//!   - See: [DbgHelp Functions](https://learn.microsoft.com/en-us/windows/win32/debug/dbghelp-functions)
//!
//! ## Why separate modules?
//!
//! - Platform-specific (and unsafe) FFI code stays isolated
//! - Conditional compilation keeps non-Windows builds free of dbghelp glue
//! - The portable engine in [`resolver`](crate::resolver) never sees a raw
//!   platform type
//!
//! [`SymbolSource`]: crate::source::SymbolSource

#[cfg(windows)]
pub mod windows;

// Other platforms have no comparable in-process symbol enumeration service;
// a source wrapping e.g. libdwfl could slot in here behind its own cfg.
