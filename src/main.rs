//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Secure password generator with strength analysis.

use anyhow::{Context, Result};
use clap::{Args, Parser};

use rpassgen::config::Settings;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpassgen", version)]
#[command(about = "Generate secure passwords and passphrases and rate their strength", long_about = None)]
enum Cli {
    /// Generate a random password
    Password(PasswordArgs),

    /// Quick password with all common character sets
    Quick {
        /// Print JSON instead of a card
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate a memorable passphrase
    Passphrase(PassphraseArgs),

    /// Test password strength and properties
    Check(CheckArgs),

    /// Configure a password step by step
    Interactive,
}

#[derive(Debug, Args)]
struct PasswordArgs {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Include symbols
    #[arg(short, long, default_value_t = false)]
    symbols: bool,

    /// Include special characters such as §€£
    #[arg(short = 'x', long, default_value_t = false)]
    special: bool,

    /// Avoid visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    exclude_similar: bool,

    /// Print JSON instead of a card
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct PassphraseArgs {
    /// Number of words (3-10)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=10))]
    words: Option<u8>,

    /// Separator between words
    #[arg(long)]
    separator: Option<String>,

    /// Word list language (de, en)
    #[arg(long)]
    language: Option<String>,

    /// Print JSON instead of a card
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Password to test, prompted for when omitted
    password: Option<String>,

    /// Also show the zxcvbn estimate
    #[arg(long, default_value_t = false)]
    zxcvbn: bool,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,

    /// Print JSON instead of a card
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(_) => log::debug!("No .env file found"),
    }

    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    log::debug!("Settings: {:?}", settings);

    match cli {
        Cli::Password(args) => {
            let mut options = settings.password_options();
            if let Some(length) = args.length {
                options.length = length;
            }
            options.lowercase = !args.no_lowercase;
            options.uppercase = !args.no_uppercase;
            options.numbers = !args.no_numbers;
            options.symbols = args.symbols;
            options.special = args.special;
            options.exclude_similar = args.exclude_similar;
            commands::password_gen::generate_random(&settings, &options, args.json)
        }
        Cli::Quick { json } => commands::password_gen::generate_quick(&settings, json),
        Cli::Passphrase(args) => {
            let mut options = settings.passphrase_options();
            if let Some(words) = args.words {
                options.word_count = usize::from(words);
            }
            if let Some(separator) = args.separator {
                options.separator = separator;
            }
            if let Some(language) = args.language {
                options.language = language;
            }
            commands::password_gen::generate_memorable(&settings, &options, args.json)
        }
        Cli::Check(args) => commands::testpass::test_password(
            args.password,
            args.zxcvbn,
            args.check_confusion,
            args.json,
        ),
        Cli::Interactive => commands::interactive::run(&settings),
    }
}
