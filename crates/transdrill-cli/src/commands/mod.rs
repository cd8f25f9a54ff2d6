pub mod bank;
pub mod check;
pub mod drill;
pub mod init;
pub mod validate;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG when `seed` is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// The `--bank` flag wins over the configured bank path.
pub fn bank_path(flag: Option<PathBuf>, configured: PathBuf) -> PathBuf {
    flag.unwrap_or(configured)
}
