//! Once-per-process runtime bootstrap.
//!
//! The evaluator's native dependencies are shipped alongside the function
//! bundle: shared libraries in a `lib/` directory, plus the `R_HOME` and
//! `R_LIBS` environment variables pointing into the bundle. All of it must
//! be in place before the first request is served, so `main` calls
//! [`init_runtime`] once and the gate makes later calls no-ops.

use std::env;
use std::fs;
use std::path::PathBuf;

use libloading::Library;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::Error;

/// Filesystem layout expected by the embedded evaluator.
#[derive(Debug, Clone)]
pub struct RuntimeLayout {
    /// Directory whose regular files are loaded as shared libraries.
    pub lib_dir: PathBuf,
    /// Value exported as `R_HOME`.
    pub r_home: PathBuf,
    /// Value exported as `R_LIBS`.
    pub r_libs: PathBuf,
}

impl Default for RuntimeLayout {
    fn default() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        RuntimeLayout {
            lib_dir: PathBuf::from("lib"),
            r_home: cwd.clone(),
            r_libs: cwd.join("site-library"),
        }
    }
}

// Keeps the loaded libraries alive for the life of the process and gates
// re-initialization.
static LIBRARIES: OnceCell<Vec<Library>> = OnceCell::new();

/// Prepares the process for the embedded evaluator: exports the environment
/// variables and loads every regular file in `lib_dir` as a shared library.
/// The first call does the work; every later call returns immediately. A
/// missing or unreadable `lib_dir` fails the bootstrap and is not recovered.
pub fn init_runtime(layout: &RuntimeLayout) -> Result<(), Error> {
    LIBRARIES.get_or_try_init(|| {
        env::set_var("R_HOME", &layout.r_home);
        env::set_var("R_LIBS", &layout.r_libs);
        let mut libraries = Vec::new();
        for entry in fs::read_dir(&layout.lib_dir)? {
            let path = entry?.path();
            if path.is_file() {
                debug!("loading shared library {}", path.display());
                libraries.push(unsafe { Library::new(&path) }?);
            }
        }
        debug!("loaded {} shared libraries", libraries.len());
        Ok::<_, Error>(libraries)
    })?;
    Ok(())
}
