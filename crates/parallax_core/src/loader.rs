//! Runtime shared-library loader and bootstrap resolver.
//!
//! # Responsibility
//! - Open the runtime's shared library and bind its bootstrap symbol.
//! - Implement entry-point resolution for dispatch-table construction.
//!
//! # Invariants
//! - The library stays loaded for the loader's lifetime; resolved entry
//!   points must not outlive it.
//! - Per-name resolution failures surface as `None`, never as panics;
//!   only opening the library itself can fail.

use crate::extension::dispatch::{EntryPointResolver, RawEntryPoint};
use crate::model::handle::InstanceHandle;
use crate::model::result::RuntimeResult;
use libloading::{Library, Symbol};
use log::{debug, info};
use std::error::Error;
use std::ffi::CString;
use std::fmt::{Display, Formatter};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

const BOOTSTRAP_SYMBOL: &[u8] = b"xrGetInstanceProcAddr\0";

type PfnGetInstanceProcAddr = unsafe extern "system" fn(
    instance: u64,
    name: *const c_char,
    function: *mut Option<RawEntryPoint>,
) -> RuntimeResult;

/// Runtime library bootstrap errors.
#[derive(Debug)]
pub enum LoaderError {
    /// The shared library could not be opened.
    Open { path: PathBuf, message: String },
    /// The library lacks the bootstrap resolution symbol.
    MissingBootstrapSymbol { path: PathBuf, message: String },
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, message } => {
                write!(
                    f,
                    "failed to open runtime library `{}`: {message}",
                    path.display()
                )
            }
            Self::MissingBootstrapSymbol { path, message } => {
                write!(
                    f,
                    "runtime library `{}` has no xrGetInstanceProcAddr: {message}",
                    path.display()
                )
            }
        }
    }
}

impl Error for LoaderError {}

/// Runtime shared library with its bootstrap resolver bound.
pub struct RuntimeLibrary {
    path: PathBuf,
    get_instance_proc_addr: PfnGetInstanceProcAddr,
    // Dropping the library unloads every entry point resolved through it.
    _library: Library,
}

impl RuntimeLibrary {
    /// Opens the runtime library at `path` and binds its bootstrap
    /// symbol.
    ///
    /// # Errors
    /// - `Open` when the library cannot be loaded.
    /// - `MissingBootstrapSymbol` when `xrGetInstanceProcAddr` is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref().to_path_buf();
        let library = unsafe { Library::new(&path) }.map_err(|err| LoaderError::Open {
            path: path.clone(),
            message: err.to_string(),
        })?;
        let get_instance_proc_addr = unsafe {
            let symbol: Symbol<'_, PfnGetInstanceProcAddr> =
                library
                    .get(BOOTSTRAP_SYMBOL)
                    .map_err(|err| LoaderError::MissingBootstrapSymbol {
                        path: path.clone(),
                        message: err.to_string(),
                    })?;
            *symbol
        };
        info!(
            "event=runtime_library_open module=loader status=ok path={}",
            path.display()
        );
        Ok(Self {
            path,
            get_instance_proc_addr,
            _library: library,
        })
    }

    /// Returns the path this loader was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryPointResolver for RuntimeLibrary {
    fn resolve(&self, instance: InstanceHandle, name: &str) -> Option<RawEntryPoint> {
        // Names come from the fixed dispatch list and carry no interior
        // nul bytes; reject rather than panic if one ever does.
        let c_name = CString::new(name).ok()?;
        let mut function: Option<RawEntryPoint> = None;
        let result = unsafe {
            (self.get_instance_proc_addr)(instance.as_raw(), c_name.as_ptr(), &mut function)
        };
        if result.is_error() {
            debug!("event=entry_point_lookup module=loader status=miss name={name} result={result}");
            return None;
        }
        function
    }
}
