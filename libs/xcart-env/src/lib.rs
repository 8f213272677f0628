// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod map;

pub use map::MapEnvironment;

use std::str::FromStr;

/// Source of configuration values.
///
/// Binaries use [SystemEnvironment]; tests build a [MapEnvironment] so that they never touch the
/// process environment.
pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_required(&self, key: &str) -> Result<String, EnvError> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(EnvError::Missing(key.to_string())),
        }
    }
}

/// Parse a numeric value, falling back to `default_value` when `key` is unset.
pub fn get_number<T: FromStr>(
    env: &dyn Environment,
    key: &str,
    default_value: T,
) -> Result<T, EnvError> {
    match env.get(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| EnvError::InvalidNumber {
                key: key.to_string(),
                value,
            }),
        None => Ok(default_value),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value}. Expected a number")]
    InvalidNumber { key: String, value: String },

    #[error("Missing required environment variable {0}")]
    Missing(String),
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_values() {
        let env = MapEnvironment::from([("URL", "http://localhost"), ("BLANK", "  ")]);

        assert_eq!(env.get_required("URL").unwrap(), "http://localhost");
        assert!(matches!(env.get_required("BLANK"), Err(EnvError::Missing(key)) if key == "BLANK"));
        assert!(matches!(env.get_required("NOPE"), Err(EnvError::Missing(_))));
    }

    #[test]
    fn number_values() {
        let env = MapEnvironment::from([("TIMEOUT", " 30 "), ("BAD", "ten")]);

        assert_eq!(get_number::<u64>(&env, "TIMEOUT", 10).unwrap(), 30);
        assert_eq!(get_number::<u64>(&env, "MISSING", 10).unwrap(), 10);
        assert!(matches!(
            get_number::<u64>(&env, "BAD", 10),
            Err(EnvError::InvalidNumber { key, value }) if key == "BAD" && value == "ten"
        ));
    }
}
