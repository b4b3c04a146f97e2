//! Raw symbol record types handed over by the enumeration service.

use std::fmt;

use crate::types::Address;

/// Flag word attached to an enumerated symbol
///
/// The enumeration service reports a bit set per symbol; the cache only keeps
/// symbols carrying [`SymbolFlags::FUNCTION`]. The raw bits are preserved so
/// a source can pass the platform's flag word through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolFlags(u32);

impl SymbolFlags
{
    /// The bit marking a symbol as an exported function (0x200, the value
    /// the Windows symbol engine reports for export symbols).
    pub const FUNCTION: SymbolFlags = SymbolFlags(0x0000_0200);

    /// Wrap a raw flag word
    pub const fn new(bits: u32) -> Self
    {
        SymbolFlags(bits)
    }

    /// The raw flag word
    pub const fn bits(self) -> u32
    {
        self.0
    }

    /// Whether the function bit is set
    pub const fn is_function(self) -> bool
    {
        self.0 & Self::FUNCTION.0 != 0
    }
}

impl fmt::Display for SymbolFlags
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:08x}", self.0)
    }
}

/// One raw symbol as reported by the enumeration pass
///
/// This is the pre-filter shape: every discovered symbol comes through as a
/// record, functions and non-functions alike. [`SymbolTable::build`] decides
/// what survives into the cache.
///
/// [`SymbolTable::build`]: crate::table::SymbolTable::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord
{
    /// Symbol name as reported by the service
    pub name: String,
    /// Address of the symbol within the querying process
    pub address: Address,
    /// Raw flag word for the symbol
    pub flags: SymbolFlags,
}

impl SymbolRecord
{
    /// Convenience constructor, mostly for tests and mock sources.
    pub fn new(name: impl Into<String>, address: impl Into<Address>, flags: SymbolFlags) -> Self
    {
        Self {
            name: name.into(),
            address: address.into(),
            flags,
        }
    }
}
