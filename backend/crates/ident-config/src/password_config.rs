use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB,
    DEFAULT_ARGON2_PARALLELISM, MIN_ARGON2_MEMORY_KIB,
};

use serde::Deserialize;

/// Argon2id cost parameters for new password hashes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.memory_kib < MIN_ARGON2_MEMORY_KIB {
            return Err(ConfigError::password(format!(
                "password.memory_kib must be at least {}, got {}",
                MIN_ARGON2_MEMORY_KIB, self.memory_kib
            )));
        }

        if self.iterations < 1 {
            return Err(ConfigError::password("password.iterations must be at least 1"));
        }

        if self.parallelism < 1 {
            return Err(ConfigError::password(
                "password.parallelism must be at least 1",
            ));
        }

        Ok(())
    }
}
