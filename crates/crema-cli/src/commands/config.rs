//! Configuration commands.

use crema_cache::{keys, CacheProvider, FileCache};

use crate::cli::ConfigCommand;
use crate::config::{CliConfig, OutputFormat};
use crate::output;

/// Runs a configuration command.
pub async fn run_config(
    command: ConfigCommand,
    config: &mut CliConfig,
    format: OutputFormat,
) -> crate::CliResult<()> {
    match command {
        ConfigCommand::Show => output::output_single(config, format),
        ConfigCommand::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;

            // The currency preference also lives in the persistent
            // cache, next to the tokens, so it survives reloads with
            // the rest of the session state.
            if key == "currency" {
                let cache = FileCache::open(FileCache::default_path()?)?;
                cache
                    .set(keys::CURRENCY, &value.to_ascii_uppercase())
                    .await?;
            }

            output::success(&format!("Set {key} = {value}"));
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", CliConfig::config_path()?.display());
            Ok(())
        }
    }
}
