//! Configuration inspection commands. These run without a client.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let settings = config::resolve_settings(global)?;
            println!("base_url:   {}", settings.base_url);
            println!("branch:     {}", settings.branch);
            println!("token_type: {}", settings.token_type);
            // Show only that a token exists, never its value.
            println!(
                "token:      {}",
                if settings.token.is_some() {
                    "********"
                } else {
                    "(none)"
                }
            );
            println!("timeout:    {}s", settings.timeout.as_secs());
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", meatline_config::config_path().display());
            Ok(())
        }
    }
}
