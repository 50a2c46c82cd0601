use anyhow::{Context, Result};
use serde::Serialize;

use rpassgen::charset::find_ambiguous;
use rpassgen::render;
use rpassgen::strength::{analyze, zxcvbn_estimate, StrengthReport, ZxcvbnEstimate};

#[derive(Serialize)]
struct CheckOutput {
    report: StrengthReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    zxcvbn: Option<ZxcvbnEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ambiguous: Option<Vec<char>>,
}

pub fn test_password(
    password: Option<String>,
    with_zxcvbn: bool,
    check_confusion: bool,
    json: bool,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password to check: ")
            .context("Failed to read password")?,
    };
    log::info!("Checking password strength");

    let output = CheckOutput {
        report: analyze(&password),
        zxcvbn: with_zxcvbn.then(|| zxcvbn_estimate(&password)),
        ambiguous: check_confusion.then(|| find_ambiguous(&password)),
    };

    if json {
        println!("{}", render::to_json(&output)?);
        return Ok(());
    }

    print!("{}", render::report_card(&output.report));
    if let Some(estimate) = &output.zxcvbn {
        println!("zxcvbn: {} (score: {}/4)", estimate.rating, estimate.score);
        if !estimate.suggestions.is_empty() {
            println!("Suggestions: {}", estimate.suggestions);
        }
    }
    if let Some(confusing) = &output.ambiguous {
        if confusing.is_empty() {
            println!("No confusing characters detected");
        } else {
            println!("Potentially confusing characters: {:?}", confusing);
        }
    }
    Ok(())
}
