mod config;
mod errors;
mod generators;
mod password;

use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::errors::AppError;
use crate::password::generate;

/// Generate a random password.
///
/// The password is built from upper and lower case letters, optionally
/// extended with digits and special characters. When digits or special
/// characters are enabled the password is guaranteed to contain at least one
/// of each (given room for them).
///
/// Defaults are read from `make-password/config.json` in the user's config
/// directory when present; flags given on the command line take precedence.
#[derive(Debug, Parser)]
#[command(name = "make-password", version)]
struct Cli {
    /// The length of the password to generate [default: 15]
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Should we use special characters? [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    specials: Option<bool>,

    /// Should we use digits? [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    digits: Option<bool>,

    /// Seed the generator for reproducible output. Seeded passwords are
    /// predictable; do not use them as secrets.
    #[arg(long)]
    seed: Option<u64>,

    /// Read defaults from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    fn settings(&self, config: &Config) -> Config {
        Config {
            length: self.length.unwrap_or(config.length),
            digits: self.digits.unwrap_or(config.digits),
            specials: self.specials.unwrap_or(config.specials),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(password) => println!("{}", password),
        Err(e) => {
            log::debug!("Password generation failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let config = Config::load(cli.config.as_deref())?;
    let Config {
        length,
        digits,
        specials,
    } = cli.settings(&config);

    let password = match cli.seed {
        Some(seed) => {
            log::warn!("Using a fixed seed, the password is reproducible");
            generate(&mut StdRng::seed_from_u64(seed), length, digits, specials)?
        }
        None => generate(&mut rand::rng(), length, digits, specials)?,
    };

    Ok(password)
}
