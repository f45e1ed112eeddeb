use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

/// Top-level account sections in `info.json`, in lookup order.
pub const ACCOUNT_KEYS: [&str; 2] = ["business", "personal"];

/// Read the synced folder path from an `info.json` file.
///
/// Returns an empty string when the file cannot be opened or parsed, or
/// carries no usable account path.
#[must_use]
pub fn sync_folder_from_file(path: &Path) -> String {
    match File::open(path) {
        Ok(file) => sync_folder_from_reader(BufReader::new(file)),
        Err(e) => {
            log::debug!("cannot open {}: {e}", path.display());
            String::new()
        }
    }
}

/// Parse `info.json` content and return the first usable account path,
/// or an empty string.
#[must_use]
pub fn sync_folder_from_reader<R: Read>(reader: R) -> String {
    let root: Value = match serde_json::from_reader(reader) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("info file is not valid JSON: {e}");
            return String::new();
        }
    };
    account_path(&root).map_or_else(
        || {
            log::debug!("no account path in info file");
            String::new()
        },
        str::to_string,
    )
}

fn account_path(root: &Value) -> Option<&str> {
    ACCOUNT_KEYS.iter().find_map(|key| {
        root.get(key)
            .and_then(|account| account.get("path"))
            .and_then(Value::as_str)
    })
}
