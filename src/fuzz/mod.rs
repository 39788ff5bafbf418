//! Differential fuzz harness: generates random directory trees, round-trips
//! them through the archive writer and the system `unzip`, and verifies
//! byte-for-byte equality. See `spec.md` §4.7.

pub mod compare;
pub mod names;
pub mod runner;
pub mod seed;
pub mod tree_gen;

use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Runs one fuzz iteration: generate a tree at `seed`, round-trip it through
/// `zip_bin` and the system `unzip`, and compare. Does not touch the
/// persisted seed file; callers own seed bookkeeping so a failed iteration
/// can preserve it for reproduction.
pub fn run_iteration(zip_bin: &Path, seed: u64, scratch_dir: &Path) -> Result<()> {
    let stage_dir = scratch_dir.join("stage");
    let unzipped_dir = scratch_dir.join("unzipped");
    let archive_path = scratch_dir.join("archive.zip");

    if scratch_dir.exists() {
        std::fs::remove_dir_all(scratch_dir)?;
    }
    std::fs::create_dir_all(&stage_dir)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let total_size = tree_gen::pick_total_size(&mut rng);
    log::debug!("seed {seed}: generating tree of {total_size} bytes");
    tree_gen::generate_tree(&mut rng, &stage_dir, total_size)?;

    runner::run_zip(zip_bin, &archive_path, &stage_dir)?;
    runner::run_unzip(&archive_path, &unzipped_dir)?;

    compare::assert_trees_equal(&stage_dir, &unzipped_dir)?;
    Ok(())
}
