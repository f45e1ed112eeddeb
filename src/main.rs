#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use dropbox_finder::{SystemEnv, render, sync_folder_for};

#[derive(Parser, Debug)]
#[command(
    name = "dropbox-finder",
    version,
    about = "Print the path of the local Dropbox folder",
    disable_help_flag = true
)]
struct Cli {
    /// Print help
    #[arg(short = '?', short_alias = 'h', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Escape spaces and parenthesis characters in the output
    #[arg(short = 'e', long = "escape", default_value_t = false)]
    escape: bool,

    /// Read this info.json instead of locating the Dropbox client's one
    #[arg(short = 'f', long = "info-file", value_name = "FILE")]
    info_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match sync_folder_for(cli.info_file.as_deref(), &SystemEnv) {
        Ok(path) => {
            println!("{}", render(&path, cli.escape));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
