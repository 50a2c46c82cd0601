use rpassgen::charset::CharacterClass;
use rpassgen::passgen::{GenerationOptions, PasswordGenerator};
use rpassgen::session::{Session, LENGTH_PRESETS};
use rpassgen::{InvalidOptions, SessionError};

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> (PasswordGenerator, Session) {
        let generator = PasswordGenerator::default();
        let session = Session::new(&generator, GenerationOptions::default());
        (generator, session)
    }

    #[test]
    fn test_defaults_summary() {
        let (_, session) = new_session();
        assert_eq!(session.options().length, 16);
        assert_eq!(session.summary(), "a-z, A-Z, 0-9");
        assert_eq!(session.presets(), LENGTH_PRESETS.to_vec());
    }

    #[test]
    fn test_toggle_classes() {
        let (_, mut session) = new_session();
        assert!(session.toggle(CharacterClass::Symbol));
        assert!(!session.toggle(CharacterClass::Lowercase));
        assert_eq!(session.summary(), "A-Z, 0-9, !@#");

        let (class, enabled) = session.toggle_by_name("similar").unwrap();
        assert_eq!(class, CharacterClass::Ambiguous);
        assert!(enabled);
        assert!(session.options().exclude_similar);
        assert!(session.summary().ends_with("(without il1LIo0O)"));
    }

    #[test]
    fn test_toggle_unknown_name() {
        let (_, mut session) = new_session();
        assert_eq!(
            session.toggle_by_name("emoji"),
            Err(SessionError::UnknownClass("emoji".to_string()))
        );
    }

    #[test]
    fn test_set_length_bounds() {
        let (_, mut session) = new_session();
        assert!(session.set_length(32).is_ok());
        assert!(session.set_length(100).is_ok());
        assert_eq!(session.options().length, 100);
        assert_eq!(
            session.set_length(3),
            Err(SessionError::LengthNotAllowed { length: 3, min: 4, max: 128 })
        );
        assert_eq!(session.options().length, 100);
    }

    #[test]
    fn test_presets_respect_bounds() {
        let generator = PasswordGenerator::with_bounds(10, 24);
        let session = Session::new(&generator, GenerationOptions::default());
        assert_eq!(session.presets(), vec![12, 16, 20, 24]);
    }

    #[test]
    fn test_generate_consumes_session() {
        let (generator, mut session) = new_session();
        session.set_length(24).unwrap();
        session.toggle(CharacterClass::Symbol);
        let (password, report) = session.generate(&generator).unwrap();
        assert_eq!(password.chars().count(), 24);
        assert_eq!(report, rpassgen::analyze(&password));
        assert!(password.chars().any(|c| CharacterClass::Symbol.contains(c)));
    }

    #[test]
    fn test_generate_without_classes_fails() {
        let (generator, mut session) = new_session();
        for class in [
            CharacterClass::Lowercase,
            CharacterClass::Uppercase,
            CharacterClass::Digit,
        ] {
            session.toggle(class);
        }
        assert_eq!(session.summary(), "none");
        assert_eq!(
            session.generate(&generator).unwrap_err(),
            InvalidOptions::NoCharacterClass
        );
    }
}
