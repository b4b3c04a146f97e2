//! # Resolution Engine
//!
//! Caching layer that owns one [`SymbolTable`] per module ever queried and
//! orchestrates lazy table construction.
//!
//! The first `resolve` call for a module triggers a full symbol enumeration
//! and commits the resulting table; every later call against that handle hits
//! the already-built table. Enumeration is expensive, lookups are cheap, so
//! the cost is paid at most once per module.
//!
//! ## Usage
//!
//! ```rust
//! use symsleuth_core::error::Result;
//! use symsleuth_core::resolver::Resolver;
//! use symsleuth_core::source::SymbolSource;
//! use symsleuth_core::types::{ModuleHandle, SymbolFlags, SymbolRecord};
//!
//! struct StaticSource;
//!
//! impl SymbolSource for StaticSource
//! {
//!     fn enumerate(&mut self, _module: ModuleHandle, visit: &mut dyn FnMut(SymbolRecord)) -> Result<()>
//!     {
//!         visit(SymbolRecord::new("CreateWidget", 0x1000u64, SymbolFlags::FUNCTION));
//!         Ok(())
//!     }
//! }
//!
//! let mut resolver = Resolver::new(StaticSource);
//! let module = ModuleHandle::from(0x7ff6_0000_0000);
//! let address = resolver.resolve(module, "createwidget").unwrap();
//! assert_eq!(address.value(), 0x1000);
//! ```
//!
//! ## Thread Safety
//!
//! The resolver is not thread-safe. If multiple threads may resolve
//! concurrently, wrap it in a `Mutex` held across the whole call — the
//! check/enumerate/insert sequence must not interleave, and the underlying
//! symbol service is a non-reentrant process-wide facility. Teardown must
//! only happen while no other call is in flight.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{ResolveError, Result};
use crate::source::SymbolSource;
use crate::table::SymbolTable;
use crate::types::{Address, ModuleHandle};

/// Name-to-address resolver backed by a per-module symbol table cache
///
/// Generic over its [`SymbolSource`] so tests can inject doubles and so
/// multiple independent caches can coexist. The resolver exclusively owns
/// every table and entry it builds; the only thing handed out is the plain
/// [`Address`] value, which callers never free.
///
/// ## Lifecycle
///
/// Per module handle: unregistered, then building on the first `resolve`,
/// then ready. A failed enumeration leaves the handle unregistered so a
/// later call can retry. [`Resolver::clear`] returns every handle to
/// unregistered.
pub struct Resolver<S: SymbolSource>
{
    source: S,
    tables: HashMap<ModuleHandle, SymbolTable>,
}

impl<S: SymbolSource> Resolver<S>
{
    /// Create a resolver with an empty cache around the given source.
    pub fn new(source: S) -> Self
    {
        Self {
            source,
            tables: HashMap::new(),
        }
    }

    /// Resolve `name` within `module`, building the module's table on first
    /// use.
    ///
    /// A miss against an already-built table is final: the engine never
    /// re-enumerates implicitly. Callers that believe the symbol data went
    /// stale must [`clear`](Resolver::clear) the cache and resolve again.
    ///
    /// ## Errors
    ///
    /// - [`ResolveError::InvalidArgument`] if `name` is empty
    /// - [`ResolveError::EnumerationFailed`] if no table existed and the
    ///   enumeration pass failed; nothing is cached, the next call retries
    /// - [`ResolveError::SymbolNotFound`] if the (existing or freshly built)
    ///   table holds no case-insensitive match
    pub fn resolve(&mut self, module: ModuleHandle, name: &str) -> Result<Address>
    {
        if name.is_empty() {
            return Err(ResolveError::InvalidArgument("empty symbol name".to_string()));
        }

        let table = self.ensure_table(module)?;
        table.lookup(name).ok_or_else(|| ResolveError::SymbolNotFound {
            module,
            name: name.to_string(),
        })
    }

    /// Get the table for `module`, running the enumeration pass if none has
    /// been built yet.
    ///
    /// The fresh table is committed to the cache before being returned, so
    /// it stays visible to future calls regardless of what the caller does
    /// with it.
    ///
    /// ## Errors
    ///
    /// Returns [`ResolveError::EnumerationFailed`] when the source fails;
    /// nothing is cached in that case and a later call retries.
    pub fn ensure_table(&mut self, module: ModuleHandle) -> Result<&SymbolTable>
    {
        let Self { source, tables } = self;
        match tables.entry(module) {
            Entry::Occupied(entry) => {
                tracing::trace!(module = %module, "table already cached");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                tracing::debug!(module = %module, "no table cached, enumerating symbols");
                let mut records = Vec::new();
                source.enumerate(module, &mut |record| records.push(record))?;
                Ok(entry.insert(SymbolTable::build(module, records)))
            }
        }
    }

    /// Release every cached table and reset the resolver to empty.
    ///
    /// Idempotent; clearing an empty cache is a no-op. Addresses handed out
    /// before the call stay valid as raw values but the resolver retains no
    /// record of them.
    pub fn clear(&mut self)
    {
        tracing::debug!(modules = self.tables.len(), "clearing symbol cache");
        self.tables.clear();
    }

    /// Whether a table has been built for `module`.
    #[must_use]
    pub fn is_cached(&self, module: ModuleHandle) -> bool
    {
        self.tables.contains_key(&module)
    }

    /// The cached table for `module`, if one has been built.
    #[must_use]
    pub fn table(&self, module: ModuleHandle) -> Option<&SymbolTable>
    {
        self.tables.get(&module)
    }

    /// Handles of every module with a built table, in no particular order.
    pub fn cached_modules(&self) -> impl Iterator<Item = ModuleHandle> + '_
    {
        self.tables.keys().copied()
    }

    /// The underlying enumeration source.
    #[must_use]
    pub fn source(&self) -> &S
    {
        &self.source
    }
}
