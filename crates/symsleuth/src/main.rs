use std::process;

use clap::{Parser, Subcommand};
use symsleuth_core::{Result as ResolveResult, ResolveError};
use symsleuth_utils::init_logging;

/// Resolve function addresses from debug symbols instead of the export table.
#[derive(Parser, Debug)]
#[command(name = "symsleuth")]
#[command(version)]
#[command(about = "Resolve function addresses from debug symbols instead of the export table", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Resolve one function name within a module
    Resolve
    {
        /// Module name or path (loaded into this process if not already)
        module: String,
        /// Function name to resolve (matched case-insensitively)
        name: String,
    },
    /// List every function symbol the cache would hold for a module
    List
    {
        /// Module name or path (loaded into this process if not already)
        module: String,
    },
}

fn main()
{
    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to INFO level and Pretty format if not set
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(windows)]
fn run_command(cli: Cli) -> ResolveResult<()>
{
    use symsleuth_core::platform::windows::DbghelpSource;
    use symsleuth_core::Resolver;
    use symsleuth_utils::info;

    match cli.command {
        Commands::Resolve { module, name } => {
            let handle = load_module(&module)?;
            info!("Resolving {} in {} ({})", name, module, handle);

            let mut resolver = Resolver::new(DbghelpSource::new());
            let address = resolver.resolve(handle, &name)?;
            println!("{} = {}", name, address);
            Ok(())
        }
        Commands::List { module } => {
            let handle = load_module(&module)?;
            info!("Enumerating function symbols of {} ({})", module, handle);

            let mut resolver = Resolver::new(DbghelpSource::new());
            let table = resolver.ensure_table(handle)?;
            for entry in table.entries() {
                println!("{}  {}", entry.address, entry.name);
            }
            println!("{} function symbols", table.len());
            Ok(())
        }
    }
}

/// Obtain an opaque handle for `module`, loading it into this process if it
/// is not already mapped.
#[cfg(windows)]
fn load_module(module: &str) -> ResolveResult<symsleuth_core::ModuleHandle>
{
    use std::ffi::CString;

    use symsleuth_core::ModuleHandle;
    use windows_sys::Win32::System::LibraryLoader::{GetModuleHandleA, LoadLibraryA};

    let c_name = CString::new(module)
        .map_err(|_| ResolveError::InvalidArgument(format!("module name contains NUL: {module:?}")))?;

    let raw = unsafe {
        let existing = GetModuleHandleA(c_name.as_ptr().cast());
        if existing != 0 {
            existing
        } else {
            LoadLibraryA(c_name.as_ptr().cast())
        }
    };

    if raw == 0 {
        return Err(ResolveError::InvalidArgument(format!("unable to load module {module:?}")));
    }

    Ok(ModuleHandle::from(raw as u64))
}

#[cfg(not(windows))]
fn run_command(_cli: Cli) -> ResolveResult<()>
{
    // The dbghelp-backed source only exists on Windows; the engine itself is
    // portable and usable as a library with a custom SymbolSource.
    Err(ResolveError::InvalidArgument(
        "no debug-symbol source is available on this platform".to_string(),
    ))
}
