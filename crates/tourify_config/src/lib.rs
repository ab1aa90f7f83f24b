use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// Guarded by a `OnceCell` so repeated loads (e.g. from tests) are cheap
/// no-ops. A missing `.env` file is not an error.
pub fn ensure_dotenv_loaded() {
    INIT_DOTENV.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the unified application configuration.
///
/// Sources are layered: `config/default`, then `config/{RUN_ENV}`, then
/// environment variables prefixed with `APP` and separated by `__`
/// (e.g. `APP_SERVER__PORT=9000`). Both files are optional so a purely
/// env-driven deployment works.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder.build()?.try_deserialize()
}
