//! Resolved symbol address type.

use std::fmt;

/// Strongly typed code/data address
///
/// This wrapper around `u64` carries the address of a resolved symbol. The
/// value is meaningful only inside the querying process and only while the
/// owning module stays loaded.
///
/// ## Why a newtype and not a pointer?
///
/// Resolved addresses are never allocated or freed by this library; they are
/// read out of the symbol store and handed back as plain numbers. Keeping
/// them as a sized integer type (rather than any owning pointer type) makes
/// it impossible to mistake them for memory this crate manages.
///
/// ## Example
///
/// ```rust
/// use symsleuth_core::types::Address;
///
/// let addr = Address::from(0x1000);
/// assert_eq!(addr.value(), 0x1000);
/// assert!(!addr.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    ///
    /// Never stored in a symbol table; useful as a sentinel in tests and
    /// platform glue.
    pub const NULL: Self = Address(0);

    /// Create a new address from a `u64` value
    ///
    /// Usable in const contexts, otherwise equivalent to `Address::from`.
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Get the raw `u64` value of this address
    ///
    /// Use this when handing the address to platform APIs or casting it to a
    /// function pointer at the call site.
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Whether this is the null address
    ///
    /// Symbol tables never hold null addresses, so this is only ever true for
    /// values produced outside the cache.
    pub const fn is_null(self) -> bool
    {
        self.0 == 0
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}
