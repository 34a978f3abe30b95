//! Loads the source model of a workspace from the filesystem.
//!
//! Entries that do not fit the naming and layout rules are not errors, they
//! are left out of the model. The loader therefore never fails; at worst it
//! produces an empty workspace.
use std::{
    collections::btree_map::Entry,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, trace, warn};

use crate::{ext::PathExt, tester::Probe};

use super::{Module, Package, Source, Workspace, ENTRY_POINT, SOURCE_EXTENSION};

/// Whether `name` can name a module or a source: an ASCII uppercase letter
/// followed by ASCII letters and digits.
pub fn check_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_uppercase())
        && chars.all(|ch| ch.is_ascii_alphanumeric())
}

/// Loads the source file at `path`.
///
/// Directly under a package directory, `at_package_root` is set and the
/// entry point `main` is accepted as a name too.
pub fn load_source(path: &Path, at_package_root: bool) -> Option<Source> {
    if !path.is_file() {
        return None;
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        trace!("Skipping {}: not a source file", path.display());
        return None;
    }

    let name = path.stem_str()?;
    if !(check_name(name) || at_package_root && name == ENTRY_POINT) {
        debug!("Skipping {}: invalid source name", path.display());
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            debug!("Skipping {}: {}", path.display(), error);
            return None;
        }
    };

    Some(Source::new(path.to_path_buf(), name.to_string(), contents))
}

/// Loads the module rooted at `directory`, with all of its submodules.
/// A directory is only a module if there is a source somewhere under it.
pub fn load_module(directory: &Path, at_package_root: bool) -> Option<Module> {
    let name = directory.file_name_str()?;
    if !check_name(name) {
        debug!("Skipping {}: invalid module name", directory.display());
        return None;
    }

    let mut module = Module::new(name);
    for entry in read_entries(directory) {
        if entry.is_dir() {
            if let Some(submodule) = load_module(&entry, false) {
                module.insert_submodule(submodule);
            }
        } else if let Some(source) = load_source(&entry, at_package_root) {
            module.insert_source(source);
        }
    }

    if module.count_sources() == 0 {
        debug!("Skipping {}: contains no sources", directory.display());
        return None;
    }

    Some(module)
}

/// Loads every package directly under `directory`: subdirectories as module
/// packages and files as lone source packages.
pub fn load_workspace(directory: &Path) -> Workspace {
    let mut workspace = Workspace::default();

    for entry in read_entries(directory) {
        let package = if entry.is_dir() {
            load_module(&entry, true).map(Package::Module)
        } else {
            load_source(&entry, false).map(Package::Source)
        };
        let Some(package) = package else {
            continue;
        };

        match workspace.packages_mut().entry(package.name().to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(package);
            }
            Entry::Occupied(_) => {
                warn!(
                    "Skipping {}: package '{}' is already defined",
                    entry.display(),
                    package.name()
                );
            }
        }
    }

    debug!(
        "Loaded {} packages with {} sources from {}",
        workspace.packages().len(),
        workspace.count_sources(),
        directory.display()
    );
    workspace
}

/// Paths of the entries in `directory`, in sorted order. Unreadable
/// directories and entries are left out.
fn read_entries(directory: &Path) -> Vec<PathBuf> {
    let reader = match fs::read_dir(directory) {
        Ok(reader) => reader,
        Err(error) => {
            warn!("Could not read {}: {}", directory.display(), error);
            return vec![];
        }
    };

    let mut entries: Vec<PathBuf> = reader
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    entries
}

/// Probes over the loader, for the self-test harness.
pub fn probes() -> Vec<Probe> {
    vec![
        Probe {
            name: "empty name is invalid",
            check: || !check_name(""),
        },
        Probe {
            name: "lowercase name is invalid",
            check: || !check_name("hello"),
        },
        Probe {
            name: "name with a symbol is invalid",
            check: || !check_name("Hello+"),
        },
        Probe {
            name: "capitalised name is valid",
            check: || check_name("Hello"),
        },
        Probe {
            name: "missing directory loads as empty workspace",
            check: || load_workspace(Path::new("/nonexistent/rainfall/workspace")).is_empty(),
        },
    ]
}
