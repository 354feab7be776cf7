//! Implementation of the `stubgate config` command.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;

/// Print the effective configuration as YAML.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
