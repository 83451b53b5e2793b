//! Case conversion for generated names.
//!
//! Names are split into words on `_`, `-` and spaces, and within a segment
//! on digit runs, lowercase runs and uppercase runs. An uppercase run that
//! is followed by lowercase letters hands its last capital to the next word,
//! so `HTTPServer` splits into `HTTP` and `Server`. Splitting is done by a
//! `convert_case` converter with those boundaries.

use crate::error::{Error, Result};
use convert_case::{Boundary, Case, Casing, Converter, Pattern};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case type for generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseType {
    /// `billingAddress`. All-uppercase words after the first keep their case.
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `billing_address`.
    #[serde(rename = "snakeCase")]
    SnakeCase,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseType::CamelCase => f.write_str("camelCase"),
            CaseType::SnakeCase => f.write_str("snakeCase"),
        }
    }
}

const ALLOWED_SEPARATORS: [char; 3] = ['_', '-', ' '];

/// Word boundaries: separators, `aB`, `ABc`, and every letter/digit edge.
const BOUNDARIES: [Boundary; 9] = [
    Boundary::Underscore,
    Boundary::Hyphen,
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::Acronym,
    Boundary::DigitUpper,
    Boundary::UpperDigit,
    Boundary::DigitLower,
    Boundary::LowerDigit,
];

fn converter() -> Converter {
    Converter::new().set_boundaries(&BOUNDARIES)
}

/// Convert `name` to the given case.
///
/// Converting an already converted name returns it unchanged.
pub fn to_case(name: &str, case_type: CaseType) -> Result<String> {
    let words = split_words(name)?;

    let converted = match case_type {
        // All-uppercase words after the first keep their case, otherwise
        // `user_x_y` would become `userXY` and then `userXy`.
        CaseType::CamelCase => words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_ascii_lowercase()
                } else if word.chars().all(|c| c.is_ascii_uppercase()) {
                    word.clone()
                } else {
                    word.to_case(Case::Title)
                }
            })
            .collect::<String>(),
        CaseType::SnakeCase => converter()
            .set_pattern(Pattern::Lowercase)
            .set_delim("_")
            .convert(name),
    };

    if converted.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(name, "identifier starts with a digit"));
    }
    Ok(converted)
}

/// Split a name into words, keeping each word's case.
pub fn split_words(name: &str) -> Result<Vec<String>> {
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !ALLOWED_SEPARATORS.contains(c))
    {
        return Err(invalid(name, &format!("unsupported character {c:?}")));
    }

    let words: Vec<String> = converter()
        .set_delim(" ")
        .convert(name)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(invalid(name, "no identifier characters"));
    }
    Ok(words)
}

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidIdentifier {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
