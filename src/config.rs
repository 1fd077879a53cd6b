//! # Configuración del Servidor
//! src/config.rs
//!
//! El único valor configurable desde la línea de comandos es el directorio
//! desde el que se sirven y guardan archivos. Host y puerto son fijos.
//!
//! ## Ejemplo de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http_server --directory /tmp/archivos
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FILES_DIRECTORY=/tmp/archivos ./mini_http_server
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Host de loopback en el que escucha el servidor
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Puerto fijo del servidor
pub const DEFAULT_PORT: u16 = 4221;

/// Directorio usado cuando no se pasa `--directory`
pub const DEFAULT_DIRECTORY: &str = "files";

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http_server")]
#[command(about = "Servidor HTTP/1.1 mínimo con eco, gzip y archivos")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Directorio donde se guardan/leen archivos de /files/
    #[arg(long, default_value = DEFAULT_DIRECTORY, env = "FILES_DIRECTORY")]
    pub directory: String,

    /// Host/IP en el que escucha (no expuesto en CLI)
    #[arg(skip = DEFAULT_HOST.to_string())]
    pub host: String,

    /// Puerto en el que escucha (no expuesto en CLI)
    #[arg(skip = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ruta en disco para un archivo de `/files/<name>`
    ///
    /// Se concatena tal cual, sin sanitizar `..` ni rutas absolutas.
    pub fn files_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}/{}", self.directory, name))
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.directory.is_empty() {
            return Err("Directory must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración en el log
    pub fn log_summary(&self) {
        log::info!("⚙️  Configuración:");
        log::info!("   Address:   {}", self.address());
        log::info!("   Directory: {}", self.directory);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.directory, "files");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 4221);
    }

    #[test]
    fn test_parse_without_flags_uses_defaults() {
        let config = Config::try_parse_from(["mini_http_server"]).unwrap();
        assert_eq!(config.directory, "files");
        assert_eq!(config.address(), "127.0.0.1:4221");
    }

    #[test]
    fn test_parse_directory_flag() {
        let config =
            Config::try_parse_from(["mini_http_server", "--directory", "/tmp/data"]).unwrap();
        assert_eq!(config.directory, "/tmp/data");
        assert_eq!(config.port, 4221);
    }

    #[test]
    fn test_directory_flag_requires_value() {
        assert!(Config::try_parse_from(["mini_http_server", "--directory"]).is_err());
    }

    #[test]
    fn test_port_is_not_a_flag() {
        assert!(Config::try_parse_from(["mini_http_server", "--port", "80"]).is_err());
    }

    #[test]
    fn test_help_and_version_are_not_flags() {
        let version = Config::try_parse_from(["mini_http_server", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::UnknownArgument);

        let help = Config::try_parse_from(["mini_http_server", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::UnknownArgument);

        assert!(Config::try_parse_from(["mini_http_server", "-h"]).is_err());
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.port = 0;
        assert_eq!(config.address(), "127.0.0.1:0");
    }

    #[test]
    fn test_files_path() {
        let mut config = Config::default();
        config.directory = "/srv/files".to_string();
        assert_eq!(config.files_path("a.txt"), PathBuf::from("/srv/files/a.txt"));
    }

    #[test]
    fn test_files_path_is_not_sanitized() {
        let config = Config::default();
        assert_eq!(
            config.files_path("../secret"),
            PathBuf::from("files/../secret")
        );
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_directory() {
        let mut config = Config::default();
        config.directory = String::new();
        let result = config.validate();
        assert!(result.unwrap_err().contains("Directory"));
    }

    #[test]
    fn test_log_summary() {
        // Should not panic
        Config::default().log_summary();
    }
}
