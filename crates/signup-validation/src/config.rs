// File: src/config.rs
// Purpose: Validation limits, parsed from signup.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub username: UsernameConfig,

    #[serde(default)]
    pub password: PasswordConfig,
}

/// Username length bounds (inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameConfig {
    #[serde(default = "default_username_min")]
    pub min_length: usize,

    #[serde(default = "default_username_max")]
    pub max_length: usize,
}

/// Password rule thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Minimum length for the length rule (default: 8)
    #[serde(default = "default_password_min")]
    pub min_length: usize,

    /// Length at which a password passing every rule rates Strong (default: 10)
    #[serde(default = "default_strong_length")]
    pub strong_length: usize,

    /// Character used to mask the password in submitted payloads
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

// Default values
fn default_username_min() -> usize {
    3
}

fn default_username_max() -> usize {
    15
}

fn default_password_min() -> usize {
    8
}

fn default_strong_length() -> usize {
    10
}

fn default_mask_char() -> char {
    '*'
}

impl Default for UsernameConfig {
    fn default() -> Self {
        Self {
            min_length: default_username_min(),
            max_length: default_username_max(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_password_min(),
            strong_length: default_strong_length(),
            mask_char: default_mask_char(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Parse and check configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig =
            toml::from_str(content).context("Failed to parse validation config")?;
        config.check()?;

        Ok(config)
    }

    /// Reject limits that would make a field impossible to fill
    pub fn check(&self) -> Result<()> {
        if self.username.min_length == 0 {
            bail!("username.min_length must be at least 1");
        }
        if self.username.min_length > self.username.max_length {
            bail!(
                "username.min_length ({}) exceeds username.max_length ({})",
                self.username.min_length,
                self.username.max_length
            );
        }
        if self.password.min_length == 0 {
            bail!("password.min_length must be at least 1");
        }
        if self.password.strong_length < self.password.min_length {
            bail!(
                "password.strong_length ({}) is below password.min_length ({})",
                self.password.strong_length,
                self.password.min_length
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.username.min_length, 3);
        assert_eq!(config.username.max_length, 15);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.strong_length, 10);
        assert_eq!(config.password.mask_char, '*');
    }

    #[test]
    fn test_empty_config() {
        let config = ValidationConfig::from_toml("  \n").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r##"
            [password]
            strong_length = 12
            mask_char = "#"
        "##;
        let config = ValidationConfig::from_toml(toml).unwrap();
        assert_eq!(config.password.strong_length, 12);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.mask_char, '#');
        assert_eq!(config.username, UsernameConfig::default());
    }

    #[test]
    fn test_inverted_username_bounds_rejected() {
        let toml = r#"
            [username]
            min_length = 10
            max_length = 4
        "#;
        let err = ValidationConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_strong_below_minimum_rejected() {
        let toml = r#"
            [password]
            min_length = 12
            strong_length = 10
        "#;
        assert!(ValidationConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidationConfig::load(dir.path().join("signup.toml")).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signup.toml");
        fs::write(&path, "[username]\nmax_length = 20\n").unwrap();

        let config = ValidationConfig::load(&path).unwrap();
        assert_eq!(config.username.max_length, 20);
        assert_eq!(config.username.min_length, 3);
    }
}
