// src/domain/credentials/password.rs
use super::observer::{NoopObserver, ScanObserver};
use super::result::ValidationResult;
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 16;

/// Punctuation accepted as the special character class.
pub const SPECIAL_CHARACTERS: &str = "~`!@#$%^&*()_-+={}[]|\\:;\"'<>,.?/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordClass {
    Upper,
    Lower,
    Digit,
    Special,
    Invalid,
}

impl PasswordClass {
    #[must_use]
    pub fn of(ch: char) -> Self {
        match ch {
            'A'..='Z' => Self::Upper,
            'a'..='z' => Self::Lower,
            '0'..='9' => Self::Digit,
            c if SPECIAL_CHARACTERS.contains(c) => Self::Special,
            _ => Self::Invalid,
        }
    }
}

/// Properties accumulated over one pass.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordFlags {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub length_in_range: bool,
}

impl PasswordFlags {
    fn record(&mut self, class: PasswordClass) {
        match class {
            PasswordClass::Upper => self.has_upper = true,
            PasswordClass::Lower => self.has_lower = true,
            PasswordClass::Digit => self.has_digit = true,
            PasswordClass::Special => self.has_special = true,
            PasswordClass::Invalid => {}
        }
    }

    /// Latches on at the eighth character and off past the sixteenth; once
    /// off it stays off.
    const fn count(&mut self, position: usize) {
        if position + 1 >= MIN_PASSWORD_LENGTH {
            self.length_in_range = position < MAX_PASSWORD_LENGTH;
        }
    }

    /// Requirements not yet satisfied, in reporting order.
    #[must_use]
    pub fn missing(&self) -> Vec<PasswordRequirement> {
        [
            (self.has_upper, PasswordRequirement::Uppercase),
            (self.has_lower, PasswordRequirement::Lowercase),
            (self.has_digit, PasswordRequirement::Digit),
            (self.has_special, PasswordRequirement::Special),
            (self.length_in_range, PasswordRequirement::Length),
        ]
        .into_iter()
        .filter_map(|(met, requirement)| (!met).then_some(requirement))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Length,
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uppercase => f.write_str("Has at least one upper case letter;"),
            Self::Lowercase => f.write_str("Has at least one lower case letter;"),
            Self::Digit => f.write_str("Has at least one number;"),
            Self::Special => f.write_str("Has at least one special character;"),
            Self::Length => write!(
                f,
                "Is between {MIN_PASSWORD_LENGTH}-{MAX_PASSWORD_LENGTH} characters;"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PasswordRejection {
    Empty,
    InvalidCharacter,
    Unmet(Vec<PasswordRequirement>),
}

impl fmt::Display for PasswordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Please input a password"),
            Self::InvalidCharacter => f.write_str("An invalid character has been found"),
            Self::Unmet(requirements) => {
                f.write_str("Please create a password that")?;
                for requirement in requirements {
                    write!(f, "\n  {requirement}")?;
                }
                Ok(())
            }
        }
    }
}

/// One classified character, reported to a [`ScanObserver`]. The character
/// itself is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStep {
    pub position: usize,
    pub class: PasswordClass,
    /// Flags after this character was counted.
    pub flags: PasswordFlags,
}

/// Checks a password in one left-to-right pass.
///
/// An empty input or a character outside the four classes rejects at once.
/// Otherwise every unmet requirement is listed and the error index is the
/// end of the input.
#[must_use]
pub fn evaluate_password(input: &str) -> ValidationResult {
    evaluate_password_with(input, &mut NoopObserver)
}

/// Same as [`evaluate_password`], reporting every classified character to
/// `observer`.
pub fn evaluate_password_with<O: ScanObserver + ?Sized>(
    input: &str,
    observer: &mut O,
) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::rejected(PasswordRejection::Empty, 0);
    }

    let mut flags = PasswordFlags::default();
    let mut position = 0;

    for character in input.chars() {
        let class = PasswordClass::of(character);
        if class == PasswordClass::Invalid {
            return ValidationResult::rejected(PasswordRejection::InvalidCharacter, position);
        }

        flags.record(class);
        flags.count(position);
        observer.password_step(&PasswordStep {
            position,
            class,
            flags,
        });
        position += 1;
    }

    let missing = flags.missing();
    if missing.is_empty() {
        ValidationResult::accepted()
    } else {
        ValidationResult::rejected(PasswordRejection::Unmet(missing), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::observer::RecordingObserver;

    fn unmet(requirements: &[PasswordRequirement]) -> String {
        PasswordRejection::Unmet(requirements.to_vec()).to_string()
    }

    #[test]
    fn empty_password_short_circuits() {
        let result = evaluate_password("");
        assert_eq!(result.message(), "Please input a password");
        assert_eq!(result.error_index(), Some(0));
    }

    #[test]
    fn accepts_complete_passwords() {
        for input in ["Abcdef1!", "Zz9~Zz9~Zz9~Zz9~", "pass-WORD_42"] {
            let result = evaluate_password(input);
            assert!(result.is_valid(), "{input} rejected: {result}");
        }
    }

    #[test]
    fn lowercase_only_lists_each_missing_class() {
        let result = evaluate_password("abcdefgh");
        assert_eq!(
            result.message(),
            unmet(&[
                PasswordRequirement::Uppercase,
                PasswordRequirement::Digit,
                PasswordRequirement::Special,
            ])
        );
        assert_eq!(result.error_index(), Some(8));
        assert!(!result.message().contains("between"));
    }

    #[test]
    fn short_password_only_misses_length() {
        let result = evaluate_password("Abc1!");
        assert_eq!(result.message(), unmet(&[PasswordRequirement::Length]));
        assert_eq!(result.error_index(), Some(5));
    }

    #[test]
    fn long_password_only_misses_length() {
        let input = format!("Ab#{}", "1".repeat(20));
        let result = evaluate_password(&input);
        assert_eq!(result.message(), unmet(&[PasswordRequirement::Length]));
        assert_eq!(result.error_index(), Some(23));
    }

    #[test]
    fn invalid_character_stops_the_scan() {
        let result = evaluate_password("Abc def1!");
        assert_eq!(result.message(), "An invalid character has been found");
        assert_eq!(result.error_index(), Some(3));

        let result = evaluate_password("Pässword1!");
        assert_eq!(result.error_index(), Some(1));
    }

    #[test]
    fn composite_message_keeps_fixed_order() {
        let message = evaluate_password("!!!").message().to_string();
        let lines: Vec<_> = message.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            vec![
                "Please create a password that",
                "Has at least one upper case letter;",
                "Has at least one lower case letter;",
                "Has at least one number;",
                "Is between 8-16 characters;",
            ]
        );
    }

    #[test]
    fn every_special_character_is_recognised() {
        for ch in SPECIAL_CHARACTERS.chars() {
            assert_eq!(PasswordClass::of(ch), PasswordClass::Special, "{ch}");
        }
        assert_eq!(PasswordClass::of(' '), PasswordClass::Invalid);
        assert_eq!(PasswordClass::of('é'), PasswordClass::Invalid);
    }

    #[test]
    fn length_flag_latches_between_eight_and_sixteen() {
        let mut observer = RecordingObserver::default();
        let input = "Aa1!".repeat(5);
        let _ = evaluate_password_with(&input, &mut observer);

        let in_range: Vec<_> = observer
            .password_steps
            .iter()
            .map(|step| step.flags.length_in_range)
            .collect();
        for (position, flag) in in_range.iter().enumerate() {
            assert_eq!(*flag, (7..16).contains(&position), "position {position}");
        }
    }

    #[test]
    fn length_bounds_agree_with_total_length() {
        for len in 1..=24 {
            let input: String = "Aa1!".chars().cycle().take(len).collect();
            let result = evaluate_password(&input);
            assert_eq!(
                result.is_valid(),
                (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len),
                "length {len}"
            );
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        for input in ["", "Abcdef1!", "abcdefgh", "Abc def1!"] {
            assert_eq!(evaluate_password(input), evaluate_password(input));
        }
    }
}
