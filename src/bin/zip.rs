//! `zip ARCHIVE PATH...`, the minimal, portable ZIP archive writer CLI.
//!
//! No option flags are defined. Any argument beginning with `-` aborts with
//! "unknown cmdline option". Fewer than two non-option arguments prints
//! usage and exits `0xff`. Exit codes: `0` on success, `0xff` on any fatal
//! condition. See `spec.md` §6.

use pkzip::scanner::scan;
use pkzip::writer::create_archive;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: zip ARCHIVE PATH...";
const FATAL_EXIT: u8 = 0xff;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("zip: {message}");
            ExitCode::from(FATAL_EXIT)
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    for arg in &args {
        if arg.starts_with('-') {
            return Err(format!("unknown cmdline option: {arg}"));
        }
    }

    if args.len() < 2 {
        eprintln!("{USAGE}");
        return Err("too few arguments".to_string());
    }

    let archive_path = PathBuf::from(&args[0]);
    let input_paths: Vec<PathBuf> = args[1..].iter().map(PathBuf::from).collect();

    log::info!(
        "creating {} from {} path argument(s)",
        archive_path.display(),
        input_paths.len()
    );

    let entries = scan(&input_paths).map_err(|e| e.to_string())?;
    create_archive(&archive_path, &entries).map_err(|e| e.to_string())?;

    log::info!("wrote {} entries to {}", entries.len(), archive_path.display());
    Ok(())
}
