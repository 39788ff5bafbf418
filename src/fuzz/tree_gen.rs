//! Seeded random directory tree generator for the differential fuzz harness.
//!
//! Builds a tree under `root` whose total file-content size is `total_size`
//! bytes, using the same `rand::rngs::StdRng::seed_from_u64`-seeded PRNG
//! approach this corpus reaches for (`mbf-zip`, `BlitzArch`) wherever it
//! needs reproducible randomness.

use super::names::NameGenerator;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const MAX_DEPTH: usize = 5;
pub const MAX_ENTRIES_PER_DIR: usize = 1000;
pub const MAX_TOTAL_SIZE: u64 = 1024 * 1024;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A safety valve against pathological (if vanishingly unlikely) runs where
/// the random walk never returns to the root. Not part of the spec's model;
/// purely defensive.
const MAX_TOTAL_ENTRIES: u64 = 50_000;

enum Choice {
    File,
    Subdir,
    Return,
}

struct DirFrame {
    path: PathBuf,
    entry_count: usize,
}

/// Draws the target total tree size uniformly from `[0, MAX_TOTAL_SIZE]`.
pub fn pick_total_size(rng: &mut StdRng) -> u64 {
    rng.gen_range(0..=MAX_TOTAL_SIZE)
}

/// Generates a tree under `root` (which must already exist and be empty)
/// with `total_size` bytes of file content spread across it.
pub fn generate_tree(rng: &mut StdRng, root: &Path, total_size: u64) -> Result<()> {
    let mut names = NameGenerator::new();
    let mut remaining = total_size;
    let mut stack = vec![DirFrame {
        path: root.to_path_buf(),
        entry_count: 0,
    }];
    let mut total_entries = 0u64;

    loop {
        let depth = stack.len() - 1;
        let frame_full = stack.last().unwrap().entry_count >= MAX_ENTRIES_PER_DIR;
        let can_file = !frame_full;
        let can_subdir = !frame_full && depth < MAX_DEPTH;
        let can_return = depth > 0;

        if total_entries >= MAX_TOTAL_ENTRIES && can_return {
            stack.pop();
            continue;
        }

        let choice = pick_choice(rng, can_file, can_subdir, can_return, remaining);
        match choice {
            None if depth == 0 => break,
            None => {
                stack.pop();
                continue;
            }
            Some(Choice::File) => {
                let cap = remaining.min(MAX_FILE_SIZE);
                let size = if cap == 0 { 0 } else { rng.gen_range(0..=cap) };
                remaining -= size;
                let name = names.next_name();
                write_random_file(rng, &stack.last().unwrap().path.join(&name), size)?;
                stack.last_mut().unwrap().entry_count += 1;
                total_entries += 1;
            }
            Some(Choice::Subdir) => {
                let name = names.next_name();
                let path = stack.last().unwrap().path.join(&name);
                std::fs::create_dir(&path)?;
                stack.last_mut().unwrap().entry_count += 1;
                total_entries += 1;
                stack.push(DirFrame {
                    path,
                    entry_count: 0,
                });
            }
            Some(Choice::Return) => {
                stack.pop();
            }
        }

        if stack.is_empty() {
            break;
        }
    }

    Ok(())
}

/// Picks the next step, weighted to make termination likely: more weight on
/// `Return` as the depth grows and as the remaining size budget shrinks.
fn pick_choice(
    rng: &mut StdRng,
    can_file: bool,
    can_subdir: bool,
    can_return: bool,
    remaining: u64,
) -> Option<Choice> {
    let file_weight = if can_file {
        if remaining > 0 {
            5
        } else {
            1
        }
    } else {
        0
    };
    let subdir_weight = if can_subdir { 3 } else { 0 };
    let return_weight = if can_return { 4 } else { 0 };

    let total = file_weight + subdir_weight + return_weight;
    if total == 0 {
        return None;
    }
    let mut pick = rng.gen_range(0..total);
    if pick < file_weight {
        return Some(Choice::File);
    }
    pick -= file_weight;
    if pick < subdir_weight {
        return Some(Choice::Subdir);
    }
    Some(Choice::Return)
}

fn write_random_file(rng: &mut StdRng, path: &Path, size: u64) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    let mut remaining = size;
    let mut buf = [0u8; 64 * 1024];
    while remaining > 0 {
        let chunk = remaining.min(buf.len() as u64) as usize;
        rng.fill(&mut buf[..chunk]);
        file.write_all(&buf[..chunk])?;
        remaining -= chunk as u64;
    }
    Ok(())
}
