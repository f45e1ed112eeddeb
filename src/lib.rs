#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod env;
pub mod error;
pub mod finder;
pub mod info;
pub mod output;
pub mod platform;

pub use env::{Env, SystemEnv};
pub use error::FinderError;
pub use finder::{find_sync_folder, find_sync_folder_with, sync_folder_for};
pub use info::{sync_folder_from_file, sync_folder_from_reader};
pub use output::{escape_path, render};
pub use platform::{Platform, locate_info_file};
