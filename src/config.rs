//! 🜂 Configuration
//!
//! Small TOML layer over the fixed defaults: persona name, memory
//! file location and the default symbolic port.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "config/luxsilente.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LuxConfig {
    /// Display name of the persona
    pub nombre: String,
    /// Location of the persisted memory file
    pub memoria_path: PathBuf,
    /// Port reported by connect-to-web when none is given
    pub puerto_default: u16,
}

impl Default for LuxConfig {
    fn default() -> Self {
        Self {
            nombre: "LuxSilente".to_string(),
            memoria_path: PathBuf::from("luxsilente_memoria.json"),
            puerto_default: 5000,
        }
    }
}

impl LuxConfig {
    /// Loads `config/luxsilente.toml` when present, defaults otherwise.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_PATH).exists() {
            Self::load_from(Path::new(CONFIG_PATH))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads and validates a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LuxConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.nombre.is_empty() {
            anyhow::bail!("El nombre de la persona no puede estar vacío");
        }

        if self.memoria_path.as_os_str().is_empty() {
            anyhow::bail!("La ruta de memoria no puede estar vacía");
        }

        if self.puerto_default == 0 {
            anyhow::bail!("El puerto por defecto debe ser > 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LuxConfig::default();
        assert_eq!(config.nombre, "LuxSilente");
        assert_eq!(config.memoria_path, PathBuf::from("luxsilente_memoria.json"));
        assert_eq!(config.puerto_default, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("luxsilente.toml");
        std::fs::write(&path, "nombre = \"Umbra\"\n").unwrap();

        let config = LuxConfig::load_from(&path).unwrap();
        assert_eq!(config.nombre, "Umbra");
        assert_eq!(config.puerto_default, 5000);
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let config = LuxConfig {
            nombre: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
