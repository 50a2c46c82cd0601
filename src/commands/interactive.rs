use std::io::{self, BufRead, Write};

use anyhow::Result;

use rpassgen::config::Settings;
use rpassgen::render;
use rpassgen::session::Session;

const HELP: &str = "Commands: length <n> | toggle <lower|upper|digits|symbols|special|similar> | show | generate | quit";

pub fn run(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(settings, stdin.lock(), stdout.lock())
}

fn run_with<R: BufRead, W: Write>(settings: &Settings, input: R, mut out: W) -> Result<()> {
    let generator = settings.generator();
    let mut session = Session::new(&generator, settings.password_options());

    writeln!(out, "Interactive password generator")?;
    writeln!(out, "Length presets: {:?}", session.presets())?;
    writeln!(out, "{}", HELP)?;
    show(&mut out, &session)?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next();

        match (command, argument) {
            ("length", Some(value)) => match value.parse::<usize>() {
                Ok(length) => match session.set_length(length) {
                    Ok(()) => writeln!(out, "Length: {} characters", length)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                },
                Err(_) => writeln!(out, "Error: '{}' is not a number", value)?,
            },
            ("toggle", Some(name)) => match session.toggle_by_name(name) {
                Ok((class, enabled)) => {
                    log::debug!("Toggled {} to {}", class, enabled);
                    writeln!(out, "{}: {}", class, if enabled { "on" } else { "off" })?;
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            ("show", None) => show(&mut out, &session)?,
            ("generate", None) => {
                return match session.generate(&generator) {
                    Ok((password, report)) => {
                        write!(out, "{}", render::password_card("Generated", &password, &report))?;
                        Ok(())
                    }
                    Err(e) => {
                        log::warn!("Interactive generation rejected: {}", e);
                        writeln!(out, "Error: {}", e)?;
                        Ok(())
                    }
                };
            }
            ("quit", None) | ("exit", None) => break,
            _ => writeln!(out, "{}", HELP)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn show<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "Length:     {} characters", session.options().length)?;
    writeln!(out, "Characters: {}", session.summary())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        run_with(&Settings::default(), script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_generate_after_configuration() {
        let output = run_script("length 20\ntoggle symbols\ngenerate\n");
        assert!(output.contains("Length: 20 characters"));
        assert!(output.contains("symbols: on"));
        assert!(output.contains("Length:     20 characters"));
        assert!(output.contains("== Generated"));
    }

    #[test]
    fn test_rejected_length_keeps_session() {
        let output = run_script("length 2\nshow\nquit\n");
        assert!(output.contains("Error: Length 2 is outside 4..=128"));
        assert!(!output.contains("== Generated"));
    }

    #[test]
    fn test_all_classes_off_reports_error() {
        let output = run_script("toggle lower\ntoggle upper\ntoggle digits\nshow\ngenerate\n");
        assert!(output.contains("Characters: none"));
        assert!(output.contains("Error: At least one character set must be included"));
    }
}
