use std::path::Path;

use crate::env::{Env, SystemEnv};
use crate::error::FinderError;
use crate::info::sync_folder_from_file;
use crate::platform::locate_info_file;

/// Locate this host's Dropbox `info.json` and return the synced folder path.
///
/// An empty string means Dropbox is not installed or its info file is
/// unreadable.
///
/// # Errors
/// Returns an error when the environment does not say where to look.
pub fn find_sync_folder() -> Result<String, FinderError> {
    find_sync_folder_with(&SystemEnv)
}

/// Variant of [`find_sync_folder`] with injectable environment access.
///
/// # Errors
/// Returns an error when the environment does not say where to look.
pub fn find_sync_folder_with(envx: &dyn Env) -> Result<String, FinderError> {
    let info_file = locate_info_file(envx)?;
    Ok(sync_folder_from_file(&info_file))
}

/// Read `info_file` when given, otherwise locate it through `envx`.
///
/// # Errors
/// Returns an error only when locating the file fails.
pub fn sync_folder_for(info_file: Option<&Path>, envx: &dyn Env) -> Result<String, FinderError> {
    info_file.map_or_else(
        || find_sync_folder_with(envx),
        |p| Ok(sync_folder_from_file(p)),
    )
}
