//! # Symbol Table
//!
//! The per-module mapping from function name to address.
//!
//! A table is built once from the records of a single enumeration pass and
//! never mutated afterwards. Lookups are case-insensitive linear scans in
//! enumeration order — the pass is the expensive part, the scan is cheap and
//! amortized across many lookups.

use crate::types::{Address, ModuleHandle, SymbolRecord};

/// One cached function symbol: an owned name and its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry
{
    /// Symbol name, never empty
    pub name: String,
    /// Symbol address, never null
    pub address: Address,
}

/// All function symbols belonging to one loaded module
///
/// Built lazily by the resolver on the first lookup miss for a handle, fully
/// populated in one pass, then immutable until the whole cache is torn down.
///
/// ## Ordering
///
/// Entries keep the enumeration service's order. Callers get no ordering
/// guarantee, but a lookup always returns the *first* case-insensitive match
/// in that order.
#[derive(Debug, Clone)]
pub struct SymbolTable
{
    module: ModuleHandle,
    entries: Vec<SymbolEntry>,
}

impl SymbolTable
{
    /// Build a table from the raw records of one enumeration pass.
    ///
    /// Only records flagged as functions enter the table; everything else is
    /// discarded. Records with an empty name or a null address are dropped
    /// too, so the table invariants hold by construction.
    #[must_use]
    pub fn build(module: ModuleHandle, records: impl IntoIterator<Item = SymbolRecord>) -> Self
    {
        let entries = records
            .into_iter()
            .filter(|record| record.flags.is_function() && !record.name.is_empty() && !record.address.is_null())
            .map(|record| SymbolEntry {
                name: record.name,
                address: record.address,
            })
            .collect::<Vec<_>>();

        tracing::debug!(module = %module, entries = entries.len(), "built symbol table");

        Self { module, entries }
    }

    /// Find the address of the first entry matching `name`, ignoring ASCII
    /// case.
    ///
    /// Case-insensitivity is deliberate: the documented-API layer this
    /// library substitutes for treats symbol names case-insensitively even
    /// though the underlying symbol store is case-sensitive.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Address>
    {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.address)
    }

    /// Handle of the module this table describes
    #[must_use]
    pub fn module(&self) -> ModuleHandle
    {
        self.module
    }

    /// Cached entries, in enumeration order
    #[must_use]
    pub fn entries(&self) -> &[SymbolEntry]
    {
        &self.entries
    }

    /// Number of cached function symbols
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// Whether the enumeration pass yielded no function symbols
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}
