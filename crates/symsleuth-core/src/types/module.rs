//! Module handle type.

use std::fmt;

/// Opaque identifier of a loaded binary image within the current process
///
/// The resolver uses this purely as the key for its table cache; it never
/// loads, validates, or dereferences the module itself. On Windows this is
/// the numeric value of an `HMODULE` (the image base), but any stable
/// per-module value works.
///
/// ## Example
///
/// ```rust
/// use symsleuth_core::types::ModuleHandle;
///
/// let module = ModuleHandle::from(0x7ff6_0000_0000);
/// assert_eq!(module.value(), 0x7ff6_0000_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleHandle(u64);

impl ModuleHandle
{
    /// Create a handle from its raw numeric value
    pub const fn new(value: u64) -> Self
    {
        ModuleHandle(value)
    }

    /// Get the raw numeric value of this handle
    pub const fn value(self) -> u64
    {
        self.0
    }
}

impl From<u64> for ModuleHandle
{
    fn from(value: u64) -> Self
    {
        ModuleHandle(value)
    }
}

impl From<ModuleHandle> for u64
{
    fn from(module: ModuleHandle) -> Self
    {
        module.0
    }
}

impl fmt::Display for ModuleHandle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}
