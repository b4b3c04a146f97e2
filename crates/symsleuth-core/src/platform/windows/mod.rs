//! # Windows dbghelp Symbol Source
//!
//! [`SymbolSource`] implementation backed by the dbghelp symbol engine.
//!
//! dbghelp works against whatever symbol information is available for a
//! module (PDB, DWARF-in-PE, export stubs), which is what lets resolution
//! work even when the module's export table is stripped or hooked.
//!
//! ## Process-level initialization
//!
//! The symbol engine requires a single `SymInitialize` call per process.
//! That attach happens lazily on the first enumeration and is idempotent
//! across modules; the engine then stays attached for the life of the
//! process. dbghelp is not reentrant, so a process must serialize all calls
//! into this module (see the thread-safety notes on
//! [`Resolver`](crate::resolver::Resolver)).

use std::ffi::c_void;
use std::ptr;

use once_cell::sync::OnceCell;
use windows_sys::Win32::Foundation::{GetLastError, SetLastError};
use windows_sys::Win32::System::Diagnostics::Debug::{SymEnumSymbols, SymInitialize, SYMBOL_INFO};
use windows_sys::Win32::System::Threading::GetCurrentProcess;

use crate::error::{ResolveError, Result};
use crate::resolver::Resolver;
use crate::source::SymbolSource;
use crate::types::{Address, ModuleHandle, SymbolFlags, SymbolRecord};

static SYM_ENGINE_ATTACHED: OnceCell<()> = OnceCell::new();

/// Attach the current process to the dbghelp symbol engine, once.
///
/// A failed attach is not sticky: the next enumeration retries it.
fn ensure_attached() -> std::result::Result<(), String>
{
    SYM_ENGINE_ATTACHED
        .get_or_try_init(|| {
            // fInvadeProcess = TRUE: load symbols for every module already
            // mapped into the process.
            let ok = unsafe { SymInitialize(GetCurrentProcess(), ptr::null(), 1) };
            if ok == 0 {
                let code = unsafe { GetLastError() };
                Err(format!("SymInitialize failed (os error {code})"))
            } else {
                Ok(())
            }
        })
        .map(|_| ())
}

/// Read the inline, length-prefixed name out of a `SYMBOL_INFO`.
///
/// `NameLen` counts characters without the terminating NUL; the `Name` field
/// is a flexible array member, so the slice has to be rebuilt from the raw
/// pointer.
unsafe fn symbol_name(info: *const SYMBOL_INFO) -> String
{
    let len = (*info).NameLen as usize;
    if len == 0 {
        return String::new();
    }
    let bytes = std::slice::from_raw_parts(ptr::addr_of!((*info).Name).cast::<u8>(), len);
    String::from_utf8_lossy(bytes).into_owned()
}

unsafe extern "system" fn enum_symbols_callback(info: *const SYMBOL_INFO, _symbol_size: u32, context: *const c_void) -> i32
{
    // Context is a thin pointer to the fat `&mut dyn FnMut` on the caller's
    // stack, alive for the whole SymEnumSymbols call.
    let visit = &mut *(context.cast_mut().cast::<&mut dyn FnMut(SymbolRecord)>());
    visit(SymbolRecord {
        name: symbol_name(info),
        address: Address::from((*info).Address),
        flags: SymbolFlags::new((*info).Flags),
    });
    1 // continue enumeration
}

/// dbghelp-backed enumeration source
///
/// Stateless apart from the process-global symbol engine attach; construct
/// one per [`Resolver`].
#[derive(Debug, Default)]
pub struct DbghelpSource;

impl DbghelpSource
{
    /// Create a new source. The symbol engine attach is deferred to the
    /// first enumeration.
    #[must_use]
    pub fn new() -> Self
    {
        Self
    }
}

impl SymbolSource for DbghelpSource
{
    fn enumerate(&mut self, module: ModuleHandle, mut visit: &mut dyn FnMut(SymbolRecord)) -> Result<()>
    {
        ensure_attached().map_err(|reason| ResolveError::EnumerationFailed { module, reason })?;

        let context = ptr::addr_of_mut!(visit).cast::<c_void>();
        let ok = unsafe {
            SymEnumSymbols(
                GetCurrentProcess(),
                module.value(),
                ptr::null(),
                Some(enum_symbols_callback),
                context,
            )
        };

        if ok == 0 {
            let code = unsafe { GetLastError() };
            return Err(ResolveError::EnumerationFailed {
                module,
                reason: format!("SymEnumSymbols failed (os error {code})"),
            });
        }

        Ok(())
    }
}

/// Drop-in shape of the replaced "get function pointer by name" call.
///
/// Resolves through the cache and surfaces a miss the way callers of the
/// original API expect: `None` with the thread's last-error code set to
/// `ERROR_PROC_NOT_FOUND`. Enumeration failures also yield `None` but leave
/// the last-error code untouched.
pub fn sym_proc_address<S: SymbolSource>(resolver: &mut Resolver<S>, module: ModuleHandle, name: &str) -> Option<Address>
{
    match resolver.resolve(module, name) {
        Ok(address) => Some(address),
        Err(err) => {
            if let Some(code) = err.os_error_code() {
                unsafe { SetLastError(code) };
            }
            None
        }
    }
}
