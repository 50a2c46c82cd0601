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
// Secure password and passphrase generation with strength analysis.

pub mod charset;
pub mod config;
pub mod error;
pub mod passgen;
pub mod render;
pub mod session;
pub mod strength;
pub mod wordlist;

pub use charset::CharacterClass;
pub use error::{ConfigError, InvalidOptions, SessionError};
pub use passgen::{
    generate_passphrase, generate_password, GenerationOptions, PassphraseOptions,
    PasswordGenerator,
};
pub use strength::{analyze, StrengthReport, StrengthTier};
