// src/domain/credentials/identifier.rs
//! Finite-state recognizer for account identifiers.
//!
//! Accepted grammar: an ASCII letter, then letters or digits, where a single
//! separator (`_`, `-`, `.`) may appear between two alphanumerics. Total
//! length is 5 to 16 characters. The verdict is chosen from the state the
//! machine halts in, which lets each rejection carry a precise reason.

use super::observer::{NoopObserver, ScanObserver};
use super::result::ValidationResult;
use std::fmt;

pub const MIN_IDENTIFIER_LENGTH: usize = 5;
pub const MAX_IDENTIFIER_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Separator,
    Other,
}

impl CharClass {
    #[must_use]
    pub const fn of(ch: char) -> Self {
        match ch {
            'A'..='Z' | 'a'..='z' => Self::Letter,
            '0'..='9' => Self::Digit,
            '_' | '-' | '.' => Self::Separator,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierState {
    Start,
    AfterFirstLetter,
    AlphaNumeric,
    AfterSeparator,
}

impl IdentifierState {
    /// Transition table. `None` means the machine halts on this character.
    #[must_use]
    pub const fn next(self, class: CharClass) -> Option<Self> {
        use CharClass::{Digit, Letter, Separator};

        match (self, class) {
            (Self::Start, Letter) => Some(Self::AfterFirstLetter),
            (Self::AfterFirstLetter | Self::AlphaNumeric | Self::AfterSeparator, Letter | Digit) => {
                Some(Self::AlphaNumeric)
            }
            (Self::AlphaNumeric, Separator) => Some(Self::AfterSeparator),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::AlphaNumeric)
    }
}

/// One consumed character, reported to a [`ScanObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierStep {
    pub position: usize,
    pub character: char,
    pub class: CharClass,
    pub from: IdentifierState,
    pub to: IdentifierState,
    /// Characters consumed including this one.
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierRejection {
    Empty,
    MustStartWithLetter,
    MissingAlphanumeric,
    TooShort,
    TooLong,
    InvalidCharacter,
    SeparatorNotFollowedByAlphanumeric,
}

impl fmt::Display for IdentifierRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("The identifier is empty"),
            Self::MustStartWithLetter => {
                f.write_str("An identifier must start with a letter (A-Z, a-z)")
            }
            Self::MissingAlphanumeric => f.write_str(
                "An identifier must contain letters or digits (A-Z, a-z, 0-9) after the first character",
            ),
            Self::TooShort => write!(
                f,
                "An identifier is too short: it must have at least {MIN_IDENTIFIER_LENGTH} characters"
            ),
            Self::TooLong => write!(
                f,
                "An identifier is too long: it must have no more than {MAX_IDENTIFIER_LENGTH} characters"
            ),
            Self::InvalidCharacter => f.write_str(
                "An identifier contains an invalid character or misplaced separator: \
                 only A-Z, a-z, 0-9 are allowed, with _, -, or . between alphanumeric characters",
            ),
            Self::SeparatorNotFollowedByAlphanumeric => f.write_str(
                "An identifier character following a separator (_, -, .) must be alphanumeric",
            ),
        }
    }
}

/// Machine state for one call. Never outlives `validate_identifier_with`.
#[derive(Debug)]
struct Scan {
    state: IdentifierState,
    position: usize,
    length: usize,
    stopped_early: bool,
}

impl Scan {
    fn run<O: ScanObserver + ?Sized>(input: &str, observer: &mut O) -> Self {
        let mut scan = Self {
            state: IdentifierState::Start,
            position: 0,
            length: 0,
            stopped_early: false,
        };

        for character in input.chars() {
            let class = CharClass::of(character);
            let Some(next) = scan.state.next(class) else {
                scan.stopped_early = true;
                break;
            };

            scan.length += 1;
            observer.identifier_step(&IdentifierStep {
                position: scan.position,
                character,
                class,
                from: scan.state,
                to: next,
                length: scan.length,
            });
            scan.state = next;

            // Oversized input halts on the offending character.
            if scan.length > MAX_IDENTIFIER_LENGTH {
                scan.stopped_early = true;
                break;
            }
            scan.position += 1;
        }

        scan
    }

    /// Maps the halting state to a verdict. Length checks precede the
    /// leftover-input check.
    const fn verdict(&self) -> Option<(IdentifierRejection, usize)> {
        use IdentifierState::{AfterFirstLetter, AfterSeparator, AlphaNumeric, Start};

        match self.state {
            Start => Some((IdentifierRejection::MustStartWithLetter, 0)),
            AfterFirstLetter => Some((IdentifierRejection::MissingAlphanumeric, self.position)),
            AlphaNumeric if self.length < MIN_IDENTIFIER_LENGTH => {
                Some((IdentifierRejection::TooShort, self.position))
            }
            AlphaNumeric | AfterSeparator if self.length > MAX_IDENTIFIER_LENGTH => {
                Some((IdentifierRejection::TooLong, self.position))
            }
            AlphaNumeric if self.stopped_early => {
                Some((IdentifierRejection::InvalidCharacter, self.position))
            }
            AlphaNumeric => None,
            AfterSeparator => Some((
                IdentifierRejection::SeparatorNotFollowedByAlphanumeric,
                self.position,
            )),
        }
    }
}

/// Checks an account identifier.
///
/// The input is classified as given; no trimming or case folding happens.
/// Offsets in the result count characters, not bytes.
#[must_use]
pub fn validate_identifier(input: &str) -> ValidationResult {
    validate_identifier_with(input, &mut NoopObserver)
}

/// Same as [`validate_identifier`], reporting every consumed character to
/// `observer`.
pub fn validate_identifier_with<O: ScanObserver + ?Sized>(
    input: &str,
    observer: &mut O,
) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::rejected(IdentifierRejection::Empty, 0);
    }

    match Scan::run(input, observer).verdict() {
        None => ValidationResult::accepted(),
        Some((reason, index)) => ValidationResult::rejected(reason, index),
    }
}
