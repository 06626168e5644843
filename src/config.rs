//! Runtime configuration shared by the binary and its tests.

use anyhow::{bail, Result};

use crate::types::CollisionPolicy;

/// Environment fallback for `--collision`.
pub const COLLISION_ENV: &str = "BREAD_PLACER_COLLISION";

/// Pick the collision policy: the command-line flag wins over the
/// environment, and the default is interval checking.
pub fn resolve_policy(flag: Option<&str>, env: Option<&str>) -> Result<CollisionPolicy> {
    let Some(raw) = flag.or(env) else {
        return Ok(CollisionPolicy::default());
    };
    match CollisionPolicy::from_str(raw.trim()) {
        Some(policy) => Ok(policy),
        None => bail!("unknown collision policy `{raw}` (expected `interval` or `endpoints`)"),
    }
}
