use std::env;
use std::path::{Path, PathBuf};

/// Host queries needed to locate the Dropbox info file.
/// Implemented by [`SystemEnv`] for the real process and by fakes in tests.
pub trait Env {
    /// Operating system name in the style `Windows 10`, `Mac OS X`, `Linux`.
    fn os_name(&self) -> String;
    /// Home directory of the current user.
    fn home_dir(&self) -> Option<PathBuf>;
    fn env_var(&self, key: &str) -> Option<String>;
    fn path_exists(&self, p: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl Env for SystemEnv {
    fn os_name(&self) -> String {
        match env::consts::OS {
            "windows" => "Windows".to_string(),
            "macos" => "Mac OS X".to_string(),
            "linux" => "Linux".to_string(),
            other => other.to_string(),
        }
    }
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
    fn env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
    fn path_exists(&self, p: &Path) -> bool {
        p.exists()
    }
}
