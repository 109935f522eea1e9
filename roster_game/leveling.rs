//! Player levels are derived from experience on a triangular curve:
//! reaching level `n` takes `50 * n * (n + 1)` experience in total.

/// Experience needed to reach `level` from zero.
pub fn experience_for_level(level: i32) -> i64 {
    let level = i64::from(level.max(0));
    50 * level * (level + 1)
}

/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`, using an integer
/// square root so the floor is exact.
pub fn level_for(experience: i32) -> i32 {
    let experience = experience.max(0) as u64;
    let root = (2500 + 200 * experience).isqrt();
    ((root - 50) / 100) as i32
}

/// Experience still missing to reach `level + 1`.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    (experience_for_level(level + 1) - i64::from(experience)) as i32
}
