//! # Error Types
//!
//! General error handling for symbol resolution.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use thiserror::Error;

use crate::types::ModuleHandle;

/// The Win32 `ERROR_PROC_NOT_FOUND` code (127).
///
/// The operation this library substitutes for reports a failed name lookup
/// through this code, so a miss against a built table maps to the same value.
/// Kept as a plain constant so non-Windows builds (tests, tooling) can still
/// observe the mapping.
pub const ERROR_PROC_NOT_FOUND: u32 = 127;

/// Main error type for resolution operations
///
/// This enum represents all the ways a resolution request can fail.
///
/// ## Error Categories
///
/// 1. **Lookup errors**: SymbolNotFound — terminal for that call, the cache
///    is never rebuilt on a miss
/// 2. **Enumeration errors**: EnumerationFailed — nothing was cached, so a
///    later call for the same module retries enumeration
/// 3. **Caller errors**: InvalidArgument
#[derive(Error, Debug)]
pub enum ResolveError
{
    /// No function symbol with the requested name exists in the module's table
    ///
    /// The match is case-insensitive, so this means no entry matched even
    /// ignoring case. The table stays cached; asking again for the same name
    /// fails again without re-enumerating. If fresher symbol data is needed
    /// (e.g. the module was patched in place), the only documented path is
    /// [`Resolver::clear`](crate::resolver::Resolver::clear) followed by a
    /// fresh `resolve` call.
    #[error("No symbol named {name:?} in module {module}")]
    SymbolNotFound
    {
        /// Module whose table was searched
        module: ModuleHandle,
        /// The name that failed to match
        name: String,
    },

    /// The symbol enumeration pass for a module could not run
    ///
    /// This happens when:
    /// - The symbol subsystem could not be initialized for the process
    /// - The module handle is not recognized by the symbol engine
    /// - The underlying enumeration service reports an error mid-pass
    ///
    /// No table is registered for the module, so the next `resolve` call
    /// retries enumeration from scratch.
    #[error("Symbol enumeration failed for module {module}: {reason}")]
    EnumerationFailed
    {
        /// Module whose enumeration failed
        module: ModuleHandle,
        /// Description of what went wrong
        reason: String,
    },

    /// Invalid argument passed to a resolution function
    ///
    /// Examples:
    /// - Empty symbol name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ResolveError
{
    /// Map this error to the platform error code callers of the replaced
    /// API expect.
    ///
    /// Only the not-found condition has a documented code
    /// ([`ERROR_PROC_NOT_FOUND`]); other failures return `None`.
    #[must_use]
    pub fn os_error_code(&self) -> Option<u32>
    {
        match self {
            ResolveError::SymbolNotFound { .. } => Some(ERROR_PROC_NOT_FOUND),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ResolveError>`
///
/// ```rust
/// use symsleuth_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ResolveError>;
