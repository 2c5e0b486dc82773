// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Library configuration
//!
//! Selects the sqrt backend and an optional legacy sine table asset.
//!
//! ```toml
//! [sqrt]
//! backend = "float"      # or "integer"
//!
//! [sine]
//! table = "rsin_tbl.bin" # omit to use the generated table
//! ```
//!
//! Environment overrides (applied by [`MathConfig::apply_env`]):
//! - `PSYQ_SQRT_BACKEND`: `float` or `integer`
//! - `PSYQ_SINE_TABLE`: path to a table asset

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{MathError, Result};
use crate::core::routine::MathLib;
use crate::core::sqrt::SqrtKind;
use crate::core::trig::SineTable;

/// Environment variable overriding the sqrt backend
pub const ENV_SQRT_BACKEND: &str = "PSYQ_SQRT_BACKEND";

/// Environment variable overriding the sine table path
pub const ENV_SINE_TABLE: &str = "PSYQ_SINE_TABLE";

/// `[sqrt]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqrtConfig {
    pub backend: SqrtKind,
}

/// `[sine]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SineConfig {
    /// Legacy table asset; `None` selects the generated table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<PathBuf>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MathConfig {
    pub sqrt: SqrtConfig,
    pub sine: SineConfig,
}

impl MathConfig {
    /// Parse configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use psyq_math::core::config::MathConfig;
    /// use psyq_math::core::sqrt::SqrtKind;
    ///
    /// let config = MathConfig::parse("[sqrt]\nbackend = \"integer\"\n").unwrap();
    /// assert_eq!(config.sqrt.backend, SqrtKind::Integer);
    /// assert!(config.sine.table.is_none());
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| MathError::Parse(format!("Invalid config: {}", e)))
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `sine.table` path is resolved against the directory
    /// containing the config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&data)?;

        if let (Some(table), Some(dir)) = (config.sine.table.as_mut(), path.parent()) {
            if table.is_relative() {
                *table = dir.join(&*table);
            }
        }

        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| MathError::Config(e.to_string()))
    }

    /// Apply `PSYQ_SQRT_BACKEND` / `PSYQ_SINE_TABLE` overrides
    pub fn apply_env(&mut self) -> Result<()> {
        let backend = std::env::var(ENV_SQRT_BACKEND).ok();
        let table = std::env::var(ENV_SINE_TABLE).ok();
        self.apply_overrides(backend.as_deref(), table.as_deref())
    }

    /// Apply explicit overrides (empty strings are ignored)
    pub fn apply_overrides(&mut self, backend: Option<&str>, table: Option<&str>) -> Result<()> {
        if let Some(backend) = backend.filter(|s| !s.trim().is_empty()) {
            self.sqrt.backend = backend.parse()?;
            log::debug!("sqrt backend overridden: {}", self.sqrt.backend);
        }

        if let Some(table) = table.filter(|s| !s.trim().is_empty()) {
            self.sine.table = Some(PathBuf::from(table));
            log::debug!("sine table overridden: {}", table);
        }

        Ok(())
    }

    /// Build the dispatch facade described by this configuration
    pub fn build_lib(&self) -> Result<MathLib> {
        let table = match &self.sine.table {
            Some(path) => {
                log::info!("Using sine table asset: {}", path.display());
                SineTable::load(path)?
            }
            None => SineTable::generate(),
        };

        Ok(MathLib::with_parts(table, self.sqrt.backend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MathConfig::parse("").unwrap();
        assert_eq!(config, MathConfig::default());
        assert_eq!(config.sqrt.backend, SqrtKind::Float);
    }

    #[test]
    fn test_parse_full_config() {
        let config = MathConfig::parse(
            r#"
[sqrt]
backend = "integer"

[sine]
table = "assets/rsin_tbl.bin"
"#,
        )
        .unwrap();

        assert_eq!(config.sqrt.backend, SqrtKind::Integer);
        assert_eq!(
            config.sine.table.as_deref(),
            Some(Path::new("assets/rsin_tbl.bin"))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_backend() {
        let result = MathConfig::parse("[sqrt]\nbackend = \"table\"\n");
        assert!(matches!(result, Err(MathError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = MathConfig::parse("[sqrt]\nmode = \"float\"\n");
        assert!(matches!(result, Err(MathError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = MathConfig::default();
        config.sqrt.backend = SqrtKind::Integer;
        config.sine.table = Some(PathBuf::from("rsin_tbl.bin"));

        let text = config.to_toml().unwrap();
        assert_eq!(MathConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let mut config = MathConfig::default();
        config
            .apply_overrides(Some("integer"), Some("/tmp/table.bin"))
            .unwrap();
        assert_eq!(config.sqrt.backend, SqrtKind::Integer);
        assert_eq!(
            config.sine.table.as_deref(),
            Some(Path::new("/tmp/table.bin"))
        );

        // Empty overrides leave the config untouched
        config.apply_overrides(Some(""), Some("  ")).unwrap();
        assert_eq!(config.sqrt.backend, SqrtKind::Integer);

        assert!(matches!(
            config.apply_overrides(Some("fpu"), None),
            Err(MathError::Config(_))
        ));
    }

    #[test]
    fn test_load_resolves_relative_table_path() {
        let dir = TempDir::new().unwrap();
        let table_path = dir.path().join("rsin_tbl.bin");
        let mut bytes = SineTable::generate().to_le_bytes();
        // Sample 1: 6 -> 5, still a valid quarter wave
        bytes[2] = 5;
        fs::write(&table_path, &bytes).unwrap();

        let config_path = dir.path().join("psyq.toml");
        fs::write(
            &config_path,
            "[sqrt]\nbackend = \"integer\"\n\n[sine]\ntable = \"rsin_tbl.bin\"\n",
        )
        .unwrap();

        let config = MathConfig::load(&config_path).unwrap();
        assert_eq!(config.sine.table.as_deref(), Some(table_path.as_path()));

        let lib = config.build_lib().unwrap();
        assert_eq!(lib.sqrt_kind(), SqrtKind::Integer);
        assert_eq!(lib.table().get(1), 5);
        assert_eq!(lib.table().rsin(-1), -5);
    }

    #[test]
    fn test_build_lib_missing_table() {
        let mut config = MathConfig::default();
        config.sine.table = Some(PathBuf::from("/nonexistent/rsin_tbl.bin"));
        assert!(matches!(config.build_lib(), Err(MathError::Io(_))));
    }

    #[test]
    fn test_build_lib_default_table() {
        let lib = MathConfig::default().build_lib().unwrap();
        assert_eq!(lib.table(), &SineTable::generate());
    }
}
