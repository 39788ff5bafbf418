//! `zipfuzz [--zip-bin PATH] [SEED_FILE] [SCRATCH_DIR]`, the differential fuzz
//! loop driving the `zip` writer against the system `unzip`.
//!
//! Each iteration: read the persisted seed, regenerate the scratch
//! directory, generate a random tree, invoke `zip`, invoke `unzip -d`,
//! compare the two trees, then bump and persist the seed. A failed
//! iteration preserves the seed so it can be reproduced. See `spec.md` §4.7.

use pkzip::fuzz::{run_iteration, seed};
use std::path::PathBuf;
use std::process::ExitCode;

const FATAL_EXIT: u8 = 0xff;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("zipfuzz: {message}");
            ExitCode::from(FATAL_EXIT)
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let mut zip_bin = PathBuf::from("zip");
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--zip-bin" {
            let path = args
                .next()
                .ok_or_else(|| "--zip-bin requires a path argument".to_string())?;
            zip_bin = PathBuf::from(path);
        } else if arg.starts_with("--") {
            return Err(format!("unknown cmdline option: {arg}"));
        } else {
            positional.push(arg);
        }
    }

    let seed_path = positional
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("zipfuzz.seed"));
    let scratch_dir = positional
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("zipfuzz-scratch"));

    loop {
        let current_seed = seed::load_or_init(&seed_path).map_err(|e| e.to_string())?;
        log::info!("running fuzz iteration with seed {current_seed}");

        run_iteration(&zip_bin, current_seed, &scratch_dir).map_err(|e| e.to_string())?;

        let next_seed = current_seed + 1;
        seed::store(&seed_path, next_seed).map_err(|e| e.to_string())?;
        log::info!("seed {current_seed} passed, advancing to {next_seed}");
    }
}
