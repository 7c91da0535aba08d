//! Resolution glue: config file + global flags → client settings.
//!
//! Flag values double as the environment layer because clap already reads
//! `MEATLINE_*` through the `env` attributes on `GlobalOpts`.

use meatline_config::{ClientSettings, Config, EnvOverrides};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub fn resolve_settings(global: &GlobalOpts) -> Result<ClientSettings, CliError> {
    let config = load_config_or_default();
    let overrides = EnvOverrides {
        base_url: global.base_url.clone(),
        branch: global.branch.clone(),
        token: global.token.clone(),
    };
    Ok(meatline_config::resolve(
        &config,
        global.profile.as_deref(),
        &overrides,
    )?)
}

/// Missing or unreadable config files fall back to defaults; a fresh
/// machine should still be able to run with flags alone.
pub fn load_config_or_default() -> Config {
    meatline_config::load_config().unwrap_or_default()
}
