//! Trip identifier generation.

use chrono::Utc;
use rand::Rng;

const ID_PREFIX: &str = "trip";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a collision-resistant trip identifier.
///
/// Concatenates a fixed prefix, the current timestamp in milliseconds and a
/// short random base-36 suffix, e.g. `trip_1736500000000_k3f9a01xz`. No
/// uniqueness check is made against existing records; the random suffix
/// keeps collisions negligible even for ids minted within one millisecond.
#[must_use]
pub fn generate_trip_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ID_PREFIX}_{}_{suffix}", Utc::now().timestamp_millis())
}
