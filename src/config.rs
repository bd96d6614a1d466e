//! Configuration surface for the SIMD backend.
//!
//! Layered via `figment`: built-in defaults, then an optional
//! `vector-distance.toml`, then environment variables (`VECTOR_DISTANCE_*`),
//! each layer overriding the previous one.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Controls whether the SIMD backend is probed, disabled, or mandated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimdMode {
    /// Probe CPU features at init and use the best available backend.
    #[default]
    Auto,
    /// Always use the scalar backend, even if SIMD is available.
    Off,
    /// Require a SIMD backend; `init_distance_table` returns an error if
    /// the current CPU doesn't support one.
    Force,
}

/// Runtime configuration for [`crate::table::init_distance_table`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SIMD probing policy.
    #[serde(default)]
    pub enable_simd: SimdMode,
    /// Overrides the string returned by [`crate::table::backend_name`]
    /// without changing which kernels are actually selected. Test-only hook.
    #[serde(default)]
    pub backend_name_override: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_simd: SimdMode::Auto,
            backend_name_override: None,
        }
    }
}

impl Config {
    /// Loads configuration from defaults, `vector-distance.toml` (if
    /// present), and `VECTOR_DISTANCE_*` environment variables, in that
    /// precedence order.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("vector-distance.toml"))
            .merge(Env::prefixed("VECTOR_DISTANCE_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_when_nothing_is_configured() {
        Jail::expect_with(|_jail| {
            let config = Config::load().unwrap();
            assert_eq!(config.enable_simd, SimdMode::Auto);
            assert_eq!(config.backend_name_override, None);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("vector-distance.toml", r#"enable_simd = "off""#)?;
            let config = Config::load().unwrap();
            assert_eq!(config.enable_simd, SimdMode::Off);
            Ok(())
        });
    }

    #[test]
    fn env_var_overrides_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("vector-distance.toml", r#"enable_simd = "off""#)?;
            jail.set_env("VECTOR_DISTANCE_ENABLE_SIMD", "force");
            let config = Config::load().unwrap();
            assert_eq!(config.enable_simd, SimdMode::Force);
            Ok(())
        });
    }

    #[test]
    fn backend_name_override_is_read_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("VECTOR_DISTANCE_BACKEND_NAME_OVERRIDE", "custom-backend");
            let config = Config::load().unwrap();
            assert_eq!(
                config.backend_name_override.as_deref(),
                Some("custom-backend")
            );
            Ok(())
        });
    }

    #[test]
    fn malformed_toml_surfaces_as_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("vector-distance.toml", "enable_simd = force")?;
            let result = Config::load();
            assert!(matches!(result, Err(Error::Config(_))));
            Ok(())
        });
    }
}
