use anyhow::{Context, Result};

/// Reads an optional numeric setting from the environment.
pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .with_context(|| format!("{} must be a valid number, got {:?}", key, value)),
        Err(_) => Ok(None),
    }
}
