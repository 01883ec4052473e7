use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::navigation::{MenuEntry, MenuError};
use crate::ui::theme::ThemePreset;

const CONFIG_ENV: &str = "ADMIN_DASHBOARD_CONFIG";
const CONFIG_DIR: &str = "admin-dashboard";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_COMPANY_NAME: &str = "Mi Empresa";
pub const DEFAULT_USER_NAME: &str = "Usuario";
pub const DEFAULT_USER_EMAIL: &str = "usuario@empresa.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("configuración inválida en {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("menú inválido: {0}")]
    Menu(#[from] MenuError),
}

/// Configuración de presentación del panel, cargada desde un archivo JSON.
///
/// Los campos ausentes toman los valores de [`AppConfig::default`]; un `null`
/// explícito en los campos de marca recurre a los valores genéricos del topbar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_avatar: Option<String>,
    pub theme: ThemePreset,
    /// Ruta inicial del enrutador.
    pub start_path: String,
    /// Sustituye al menú integrado cuando está presente.
    pub menu: Option<Vec<MenuEntry>>,
    pub expanded_groups: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: Some(DEFAULT_COMPANY_NAME.to_string()),
            company_logo: None,
            user_name: Some("Juan Pérez".to_string()),
            user_email: Some("juan@empresa.com".to_string()),
            user_avatar: None,
            theme: ThemePreset::default(),
            start_path: "/".to_string(),
            menu: None,
            expanded_groups: None,
        }
    }
}

impl AppConfig {
    /// Ubicación del archivo: `$ADMIN_DASHBOARD_CONFIG` o el directorio de
    /// configuración del usuario.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => {
                let existed = path.exists();
                let config = Self::load(&path)?;
                if !existed {
                    if let Err(err) = config.save(&path) {
                        log::warn!("no se pudo escribir {}: {}", path.display(), err);
                    }
                }
                Ok(config)
            }
            None => {
                log::warn!("sin directorio de configuración; usando valores por defecto");
                Ok(Self::default())
            }
        }
    }

    /// Un archivo inexistente no es un error; uno ilegible o mal formado sí.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("{} no existe; usando valores por defecto", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("configuración cargada desde {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn company_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or(DEFAULT_COMPANY_NAME)
    }

    pub fn user_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(DEFAULT_USER_NAME)
    }

    pub fn user_email(&self) -> &str {
        self.user_email.as_deref().unwrap_or(DEFAULT_USER_EMAIL)
    }
}
