use anyhow::{Context, Result};

use rpassgen::config::Settings;
use rpassgen::passgen::{GenerationOptions, PassphraseOptions};
use rpassgen::render::{self, GeneratedOutput};
use rpassgen::strength::analyze;

pub fn generate_random(settings: &Settings, options: &GenerationOptions, json: bool) -> Result<()> {
    log::info!(
        "Generating password: length {}, classes {:?}, exclude similar {}",
        options.length,
        options.enabled_classes(),
        options.exclude_similar
    );
    let password = settings
        .generator()
        .generate(options)
        .context("Failed to generate password")?;
    let report = analyze(&password);

    if json {
        println!("{}", render::to_json(&GeneratedOutput::new(&password, Some(&report)))?);
    } else {
        print!("{}", render::password_card("Password generated", &password, &report));
    }
    Ok(())
}

pub fn generate_quick(settings: &Settings, json: bool) -> Result<()> {
    log::info!("Generating quick password of length {}", settings.quick_length);
    let options = GenerationOptions::quick(settings.quick_length);
    let password = settings
        .generator()
        .generate(&options)
        .context("Failed to generate quick password")?;

    if json {
        println!("{}", render::to_json(&GeneratedOutput::new(&password, None))?);
    } else {
        let report = analyze(&password);
        print!("{}", render::password_card("Quick password", &password, &report));
    }
    Ok(())
}

pub fn generate_memorable(settings: &Settings, options: &PassphraseOptions, json: bool) -> Result<()> {
    log::info!(
        "Generating passphrase: {} words, language '{}'",
        options.word_count,
        options.language
    );
    let passphrase = settings
        .generator()
        .generate_phrase(options)
        .context("Failed to generate passphrase")?;

    if json {
        println!("{}", render::to_json(&GeneratedOutput::new(&passphrase, None))?);
    } else {
        print!("{}", render::passphrase_card(&passphrase, options));
    }
    Ok(())
}
