//! Entry point for the `zipmerge` binary.
//!
//! By default the content of the second and subsequent zip files is appended
//! to the first, rewriting the first in place. With `-o`, a new output file
//! is created containing the content of all the input zip files, and none of
//! the sources are modified.
//!
//! Everything here is argument plumbing and error printing; the actual work
//! happens in the `zipmerge` library crate.

use std::{collections::VecDeque, env, ffi, path::PathBuf, process};

use zipmerge::{MergeOptions, merge};

#[repr(i32)]
enum ExitCode {
    Success = 0,
    InvalidArg = 1,
    InvalidFile = 2,
}

const USAGE: &str = "usage: zipmerge [-o dst.zip] a.zip [b.zip...]";

pub fn shared_main() -> ! {
    let mut argv: VecDeque<ffi::OsString> = env::args_os().collect();
    let _this = argv.pop_front();

    let mut output: Option<PathBuf> = None;
    let mut inputs: Vec<PathBuf> = Vec::new();
    while let Some(arg) = argv.pop_front() {
        match arg.as_encoded_bytes() {
            b"-h" | b"--help" => {
                println!("{USAGE}");
                process::exit(ExitCode::Success as i32)
            }
            b"-o" => match argv.pop_front() {
                None => {
                    eprintln!("-o requires a file argument");
                    eprintln!("{USAGE}");
                    process::exit(ExitCode::InvalidArg as i32)
                }
                Some(path) => output = Some(PathBuf::from(path)),
            },
            _ => inputs.push(PathBuf::from(arg)),
        }
    }

    if inputs.is_empty() {
        eprintln!("{USAGE}");
        process::exit(ExitCode::InvalidArg as i32)
    }

    let options = MergeOptions { output, inputs };
    match merge(&options) {
        Err(e) => {
            eprintln!("zipmerge: {e}");
            process::exit(ExitCode::InvalidFile as i32)
        }
        Ok(report) => {
            for skip in &report.skipped {
                match &skip.entry {
                    /* Error for this entry or archive, but the merge went on. */
                    Some(name) => eprintln!(
                        "zipmerge: copying from {} ({}): {}",
                        skip.archive.display(),
                        name,
                        skip.error
                    ),
                    None => eprintln!("zipmerge: {}: {}", skip.archive.display(), skip.error),
                }
            }
            process::exit(ExitCode::Success as i32)
        }
    }
}
