// src/core/normalizer.rs
use unicode_general_category::{GeneralCategory, get_general_category};

/// Reduces a raw token to its canonical word form.
///
/// Every character is lowercased with the Unicode mapping, then anything whose
/// general category is not a letter (`L*`) or a number (`N*`) is dropped.
/// Punctuation inside a token is removed rather than replaced, so `good-bye`
/// becomes `goodbye`; combining marks such as Arabic harakat are dropped too.
///
/// # Arguments
///
/// * `token` - A whitespace-delimited substring of a line
///
/// # Returns
///
/// The normalized word, which may be empty (e.g. for `"!@#$%"`).
#[inline]
#[must_use]
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| is_letter_or_number(*c))
        .collect()
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}
