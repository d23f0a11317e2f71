use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered: `config/default`, then `config/{RUN_ENV}`, then
/// environment variables with the `EST` prefix (double underscore as the
/// section separator, e.g. `EST_SERVER__PORT=8086`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "EST".to_string());

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()));
    let workspace_root = manifest_dir
        .ancestors()
        .nth(2) // go from crates/estatify_config to workspace root
        .unwrap_or(&manifest_dir)
        .to_path_buf();

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    tracing::debug!("config: default_path: {}", default_path.display());
    tracing::debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::with_name(default_path.to_str().unwrap_or("config/default")).required(false))
        .add_source(File::with_name(env_path.to_str().unwrap_or("config/debug")).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process. `DOTENV_OVERRIDE` selects an
/// alternative file; otherwise ".env" is used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_config() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"server": {"host": "127.0.0.1", "port": 8086}}"#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8086);
        assert!(!cfg.use_appointments);
        assert!(cfg.database.is_none());
        assert!(cfg.directory.is_none());
    }

    #[test]
    fn deserializes_full_config() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{
                "server": {"host": "0.0.0.0", "port": 4000},
                "use_appointments": true,
                "use_directory": true,
                "database": {"url": "sqlite::memory:"},
                "appointments": {"admin_role": "admin"},
                "directory": {"base_url": "http://localhost:4000/api", "request_timeout_secs": 10}
            }"#,
        )
        .unwrap();
        assert!(cfg.use_appointments);
        assert_eq!(cfg.database.unwrap().url, "sqlite::memory:");
        assert_eq!(
            cfg.directory.unwrap().base_url,
            "http://localhost:4000/api"
        );
    }
}
