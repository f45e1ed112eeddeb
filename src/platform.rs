use std::path::PathBuf;

use crate::env::Env;
use crate::error::FinderError;

pub const INFO_FILE_NAME: &str = "info.json";

const WINDOWS_DIR: &str = "Dropbox";
const UNIX_DIR: &str = ".dropbox";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    UnixLike,
}

impl Platform {
    /// Classify a host by its OS name. Only a case-sensitive `Windows`
    /// prefix selects Windows; macOS, Linux and anything else are Unix-like.
    #[must_use]
    pub fn from_os_name(os_name: &str) -> Self {
        if os_name.starts_with("Windows") {
            Self::Windows
        } else {
            Self::UnixLike
        }
    }

    #[must_use]
    pub fn detect(envx: &dyn Env) -> Self {
        Self::from_os_name(&envx.os_name())
    }
}

/// Compute where the Dropbox client keeps `info.json` on this host.
/// The returned path may not exist.
///
/// # Errors
/// Returns an error when a required environment variable (Windows) or the
/// home directory (Unix-like) is unavailable.
pub fn locate_info_file(envx: &dyn Env) -> Result<PathBuf, FinderError> {
    let path = match Platform::detect(envx) {
        Platform::Windows => locate_windows(envx)?,
        Platform::UnixLike => locate_unix(envx)?,
    };
    log::debug!("candidate info file: {}", path.display());
    Ok(path)
}

fn locate_windows(envx: &dyn Env) -> Result<PathBuf, FinderError> {
    let roaming = windows_candidate(envx, "APPDATA")?;
    if envx.path_exists(&roaming) {
        return Ok(roaming);
    }
    log::debug!(
        "{} does not exist, falling back to LOCALAPPDATA",
        roaming.display()
    );
    // Not checked for existence; a missing file reads as no result.
    windows_candidate(envx, "LOCALAPPDATA")
}

fn windows_candidate(envx: &dyn Env, var: &'static str) -> Result<PathBuf, FinderError> {
    let base = envx.env_var(var).ok_or(FinderError::MissingEnvVar(var))?;
    Ok(PathBuf::from(base).join(WINDOWS_DIR).join(INFO_FILE_NAME))
}

fn locate_unix(envx: &dyn Env) -> Result<PathBuf, FinderError> {
    let home = envx.home_dir().ok_or(FinderError::MissingHomeDir)?;
    Ok(home.join(UNIX_DIR).join(INFO_FILE_NAME))
}
