//! Tests for the resolution engine and its table cache

use std::collections::{HashMap, HashSet};

use symsleuth_core::error::{ResolveError, Result};
use symsleuth_core::resolver::Resolver;
use symsleuth_core::source::SymbolSource;
use symsleuth_core::types::{Address, ModuleHandle, SymbolFlags, SymbolRecord};

/// In-memory enumeration double that counts how often each module is
/// enumerated.
#[derive(Default)]
struct MockSource
{
    modules: HashMap<ModuleHandle, Vec<SymbolRecord>>,
    failing: HashSet<ModuleHandle>,
    calls: HashMap<ModuleHandle, usize>,
}

impl MockSource
{
    fn new() -> Self
    {
        Self::default()
    }

    fn with_module(mut self, module: ModuleHandle, records: Vec<SymbolRecord>) -> Self
    {
        self.modules.insert(module, records);
        self
    }

    fn with_failing(mut self, module: ModuleHandle) -> Self
    {
        self.failing.insert(module);
        self
    }

    fn calls(&self, module: ModuleHandle) -> usize
    {
        self.calls.get(&module).copied().unwrap_or(0)
    }
}

impl SymbolSource for MockSource
{
    fn enumerate(&mut self, module: ModuleHandle, visit: &mut dyn FnMut(SymbolRecord)) -> Result<()>
    {
        *self.calls.entry(module).or_insert(0) += 1;

        if self.failing.contains(&module) {
            return Err(ResolveError::EnumerationFailed {
                module,
                reason: "simulated failure".to_string(),
            });
        }

        let records = self.modules.get(&module).cloned().unwrap_or_default();
        for record in records {
            visit(record);
        }
        Ok(())
    }
}

fn function(name: &str, address: u64) -> SymbolRecord
{
    SymbolRecord::new(name, address, SymbolFlags::FUNCTION)
}

fn data(name: &str, address: u64) -> SymbolRecord
{
    SymbolRecord::new(name, address, SymbolFlags::new(0))
}

const MODULE_M: ModuleHandle = ModuleHandle::new(0x1000_0000);
const MODULE_N: ModuleHandle = ModuleHandle::new(0x2000_0000);

fn module_m_source() -> MockSource
{
    MockSource::new().with_module(
        MODULE_M,
        vec![
            function("Alpha", 0x1000),
            function("beta", 0x2000),
            data("gamma", 0x3000),
        ],
    )
}

#[test]
fn test_scenario_module_m()
{
    let mut resolver = Resolver::new(module_m_source());

    assert_eq!(resolver.resolve(MODULE_M, "alpha").unwrap(), Address::from(0x1000));
    assert_eq!(resolver.resolve(MODULE_M, "BETA").unwrap(), Address::from(0x2000));
    assert!(matches!(
        resolver.resolve(MODULE_M, "gamma"),
        Err(ResolveError::SymbolNotFound { .. })
    ));
    assert!(matches!(
        resolver.resolve(MODULE_M, "delta"),
        Err(ResolveError::SymbolNotFound { .. })
    ));
}

#[test]
fn test_case_insensitive_hits_are_identical()
{
    let source = MockSource::new().with_module(MODULE_M, vec![function("Foo", 0x4000)]);
    let mut resolver = Resolver::new(source);

    let exact = resolver.resolve(MODULE_M, "Foo").unwrap();
    let lower = resolver.resolve(MODULE_M, "foo").unwrap();
    let upper = resolver.resolve(MODULE_M, "FOO").unwrap();

    assert_eq!(exact, lower);
    assert_eq!(exact, upper);
}

#[test]
fn test_enumeration_runs_at_most_once_per_module()
{
    let mut resolver = Resolver::new(module_m_source());

    resolver.resolve(MODULE_M, "Alpha").unwrap();
    resolver.resolve(MODULE_M, "beta").unwrap();
    let _ = resolver.resolve(MODULE_M, "missing");
    resolver.resolve(MODULE_M, "ALPHA").unwrap();

    assert_eq!(resolver.source().calls(MODULE_M), 1);
}

#[test]
fn test_miss_against_built_table_is_final()
{
    let mut resolver = Resolver::new(module_m_source());

    assert!(resolver.resolve(MODULE_M, "bar").is_err());
    assert!(resolver.resolve(MODULE_M, "bar").is_err());

    // The second miss must not have re-triggered enumeration
    assert_eq!(resolver.source().calls(MODULE_M), 1);
}

#[test]
fn test_function_flag_filtering()
{
    let source = MockSource::new().with_module(MODULE_M, vec![data("NotAFunction", 0x5000)]);
    let mut resolver = Resolver::new(source);

    // Exact name match, but the function bit is unset
    assert!(matches!(
        resolver.resolve(MODULE_M, "NotAFunction"),
        Err(ResolveError::SymbolNotFound { .. })
    ));
}

#[test]
fn test_enumeration_failure_caches_nothing()
{
    let source = module_m_source().with_failing(MODULE_N);
    let mut resolver = Resolver::new(source);

    assert!(matches!(
        resolver.resolve(MODULE_N, "anything"),
        Err(ResolveError::EnumerationFailed { .. })
    ));
    assert!(!resolver.is_cached(MODULE_N));

    // A later call retries enumeration since no table was committed
    let _ = resolver.resolve(MODULE_N, "anything");
    assert_eq!(resolver.source().calls(MODULE_N), 2);
}

#[test]
fn test_clear_resets_state()
{
    let mut resolver = Resolver::new(module_m_source());

    resolver.resolve(MODULE_M, "Alpha").unwrap();
    assert!(resolver.is_cached(MODULE_M));

    resolver.clear();
    assert!(!resolver.is_cached(MODULE_M));

    // Resolving again must enumerate again
    resolver.resolve(MODULE_M, "Alpha").unwrap();
    assert_eq!(resolver.source().calls(MODULE_M), 2);
}

#[test]
fn test_clear_on_empty_cache_is_noop()
{
    let mut resolver = Resolver::new(MockSource::new());
    resolver.clear();
    resolver.clear();
    assert_eq!(resolver.cached_modules().count(), 0);
}

#[test]
fn test_table_committed_even_when_first_lookup_misses()
{
    let mut resolver = Resolver::new(module_m_source());

    assert!(resolver.resolve(MODULE_M, "no_such_symbol").is_err());

    // The table became visible despite the miss
    assert!(resolver.is_cached(MODULE_M));
    let table = resolver.table(MODULE_M).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_empty_name_is_rejected()
{
    let mut resolver = Resolver::new(module_m_source());

    assert!(matches!(
        resolver.resolve(MODULE_M, ""),
        Err(ResolveError::InvalidArgument(_))
    ));

    // Argument validation happens before any enumeration
    assert_eq!(resolver.source().calls(MODULE_M), 0);
}

#[test]
fn test_modules_are_cached_independently()
{
    let source = module_m_source().with_module(MODULE_N, vec![function("Omega", 0x9000)]);
    let mut resolver = Resolver::new(source);

    resolver.resolve(MODULE_M, "Alpha").unwrap();
    resolver.resolve(MODULE_N, "Omega").unwrap();

    assert_eq!(resolver.cached_modules().count(), 2);
    assert_eq!(resolver.source().calls(MODULE_M), 1);
    assert_eq!(resolver.source().calls(MODULE_N), 1);

    // A name only present in M must not leak into N
    assert!(resolver.resolve(MODULE_N, "Alpha").is_err());
}

#[test]
fn test_first_match_in_enumeration_order_wins()
{
    let source = MockSource::new().with_module(
        MODULE_M,
        vec![function("Dup", 0x1111), function("dup", 0x2222)],
    );
    let mut resolver = Resolver::new(source);

    assert_eq!(resolver.resolve(MODULE_M, "DUP").unwrap(), Address::from(0x1111));
}

#[test]
fn test_ensure_table_reuses_cached_table()
{
    let mut resolver = Resolver::new(module_m_source());

    resolver.ensure_table(MODULE_M).unwrap();
    resolver.ensure_table(MODULE_M).unwrap();

    assert_eq!(resolver.source().calls(MODULE_M), 1);
}

#[test]
fn test_degenerate_records_never_enter_the_table()
{
    let source = MockSource::new().with_module(
        MODULE_M,
        vec![
            SymbolRecord::new("", 0x1000u64, SymbolFlags::FUNCTION),
            SymbolRecord::new("NullAddr", 0u64, SymbolFlags::FUNCTION),
            function("Good", 0x2000),
        ],
    );
    let mut resolver = Resolver::new(source);

    resolver.resolve(MODULE_M, "Good").unwrap();
    let table = resolver.table(MODULE_M).unwrap();
    assert_eq!(table.len(), 1);
    assert!(resolver.resolve(MODULE_M, "NullAddr").is_err());
}
