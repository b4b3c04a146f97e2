//! # Symbol Source Trait
//!
//! The seam between the resolution engine and whatever service actually
//! enumerates debug symbols for a module.
//!
//! The engine never parses debug-info formats itself; it drives a
//! [`SymbolSource`] once per module and caches what comes back. On Windows
//! the production source is
//! [`DbghelpSource`](crate::platform::windows::DbghelpSource); tests inject
//! in-memory doubles.
//!
//! ## Why a trait?
//!
//! - The expensive enumeration pass can be swapped out in tests for a
//!   counting double, which is how the at-most-once caching behavior is
//!   verified
//! - Platform-specific symbol engines stay behind a clean interface
//! - Multiple independent resolvers can wrap independent sources

use crate::error::Result;
use crate::types::{ModuleHandle, SymbolRecord};

/// Enumerates the debug symbols belonging to one module
///
/// A source performs one full traversal of a module's symbols per call,
/// handing every discovered symbol to `visit` as a raw [`SymbolRecord`] —
/// functions and non-functions alike. Filtering is the table builder's job.
///
/// ## Contract
///
/// - `visit` is called once per discovered symbol, in the service's own
///   order; that order ends up preserved in the cached table
/// - On failure, return an error instead of a partial pass; the engine
///   treats any error as "nothing was enumerated" and caches nothing
/// - The underlying service is typically a process-wide, non-reentrant
///   facility; implementations must not assume they can be called
///   concurrently
pub trait SymbolSource
{
    /// Enumerate all symbols of `module`, feeding each one to `visit`.
    ///
    /// ## Errors
    ///
    /// Returns [`ResolveError::EnumerationFailed`] (or an equivalent) when
    /// the symbol subsystem is unavailable or does not recognize the module.
    ///
    /// [`ResolveError::EnumerationFailed`]: crate::error::ResolveError::EnumerationFailed
    fn enumerate(&mut self, module: ModuleHandle, visit: &mut dyn FnMut(SymbolRecord)) -> Result<()>;
}
