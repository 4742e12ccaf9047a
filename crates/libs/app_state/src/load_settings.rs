use crate::{AppSettings, Mode};
use color_eyre::eyre::Result;
use std::env;
use std::path::Path;

const MODE_KEY: &str = "CAMERAROLL_MODE";
const ENV_PREFIX: &str = "CAMERAROLL";

/// Determine the run mode from the environment, defaulting to prod.
#[must_use]
pub fn current_mode() -> Mode {
    match env::var(MODE_KEY).as_deref() {
        Ok("dev") => Mode::Dev,
        Ok("test") => Mode::Test,
        _ => Mode::Prod,
    }
}

/// Load settings from `config/settings.json`, an optional mode-specific
/// overlay, and `CAMERAROLL`-prefixed environment variables (highest
/// precedence, `__` separates nesting levels).
pub fn load_app_settings() -> Result<AppSettings> {
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new("config"), current_mode())
}

pub fn load_app_settings_from(config_dir: &Path, mode: Mode) -> Result<AppSettings> {
    let base = config_dir.join("settings.json");
    let overlay = config_dir.join(format!("settings.{}.json", mode.as_str()));

    let builder = config::Config::builder()
        .add_source(config::File::from(base))
        .add_source(config::File::from(overlay).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;
    Ok(settings)
}
