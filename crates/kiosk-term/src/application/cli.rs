use anyhow::Result;
use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    return Command::new("kiosk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A canned-command terminal for personal sites")
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .num_args(1)
                .help(format!(
                    "Path to the configuration file. [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                )),
        )
        .arg(
            Arg::new(ConfigKey::ContentFile.to_string())
                .long(ConfigKey::ContentFile.to_string())
                .num_args(1)
                .help(
                    "Path to a YAML content set replacing the built-in banner and commands."
                        .to_string(),
                ),
        )
        .arg(
            Arg::new(ConfigKey::Prompt.to_string())
                .long(ConfigKey::Prompt.to_string())
                .num_args(1)
                .help(format!(
                    "Prompt symbol shown before the input line and command echoes. [default: {}]",
                    Config::default(ConfigKey::Prompt)
                )),
        )
        .subcommand(
            Command::new("config").about("Prints the default configuration file to stdout"),
        );
}

/// Parses the command line and loads configuration. Returns false when a
/// subcommand already handled the invocation and the UI should not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if matches.subcommand_matches("config").is_some() {
        println!("{}", Config::serialize_default(build()));
        return Ok(false);
    }

    Config::load(&matches).await?;
    return Ok(true);
}
