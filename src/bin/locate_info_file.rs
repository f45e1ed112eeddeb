#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dropbox_finder::{SystemEnv, locate_info_file};

fn main() {
    match locate_info_file(&SystemEnv) {
        Ok(p) => println!("{}", p.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
