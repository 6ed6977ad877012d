//! National tax identifier (`ddd.ddd.ddd-dd`) checks.
//!
//! The last two digits are check digits. Each one is a weighted sum of the
//! digits before it, with weights counting down to 2, taken as
//! `(sum * 10) % 11` and folded to 0 when that yields 10.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const TAX_ID_DIGITS: usize = 11;

static TAX_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("tax id pattern compiles"));

/// Why a tax identifier was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaxIdError {
    #[error("expected the form ddd.ddd.ddd-dd")]
    Format,
    /// Unreachable behind the punctuation pattern, which already fixes the
    /// digit count; kept so the digit checks stand on their own.
    #[error("expected 11 digits, found {0}")]
    Length(usize),
    #[error("all digits are identical")]
    RepeatedDigits,
    #[error("first check digit does not match")]
    FirstCheckDigit,
    #[error("second check digit does not match")]
    SecondCheckDigit,
}

/// Check digit for a run of digits whose weights count down from `len + 1` to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// Both check digits for a nine-digit body.
pub fn check_digits(body: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(body);
    let mut ten = [0u8; 10];
    ten[..9].copy_from_slice(body);
    ten[9] = first;
    (first, check_digit(&ten))
}

/// Validates the punctuated form, then the digits, stopping at the first failure.
pub fn check(value: &str) -> Result<(), TaxIdError> {
    if !TAX_ID_PATTERN.is_match(value) {
        return Err(TaxIdError::Format);
    }

    let digits: Vec<u8> = value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    if digits.len() != TAX_ID_DIGITS {
        return Err(TaxIdError::Length(digits.len()));
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(TaxIdError::RepeatedDigits);
    }
    if check_digit(&digits[..9]) != digits[9] {
        return Err(TaxIdError::FirstCheckDigit);
    }
    if check_digit(&digits[..10]) != digits[10] {
        return Err(TaxIdError::SecondCheckDigit);
    }
    Ok(())
}

pub fn is_valid(value: &str) -> bool {
    check(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn punctuate(digits: &[u8; 11]) -> String {
        let s: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        format!("{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
    }

    fn with_check_digits(body: [u8; 9]) -> [u8; 11] {
        let (first, second) = check_digits(&body);
        let mut digits = [0u8; 11];
        digits[..9].copy_from_slice(&body);
        digits[9] = first;
        digits[10] = second;
        digits
    }

    // Straight transcription of the weighted-sum rule, kept independent of check_digit.
    fn reference(digits: &[u8; 11]) -> bool {
        if digits.iter().all(|&d| d == digits[0]) {
            return false;
        }
        let mut sum = 0u32;
        for i in 1..=9 {
            sum += u32::from(digits[i - 1]) * (11 - i as u32);
        }
        let mut rem = (sum * 10) % 11;
        if rem == 10 || rem == 11 {
            rem = 0;
        }
        if rem != u32::from(digits[9]) {
            return false;
        }
        sum = 0;
        for i in 1..=10 {
            sum += u32::from(digits[i - 1]) * (12 - i as u32);
        }
        rem = (sum * 10) % 11;
        if rem == 10 || rem == 11 {
            rem = 0;
        }
        rem == u32::from(digits[10])
    }

    #[test]
    fn test_known_valid() {
        for id in ["111.444.777-35", "123.456.789-09", "529.982.247-25"] {
            assert_eq!(check(id), Ok(()), "{id}");
        }
    }

    #[test]
    fn test_check_digits_of_known_body() {
        assert_eq!(check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), (3, 5));
        assert_eq!(check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), (0, 9));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert_eq!(check("111.444.777-45"), Err(TaxIdError::FirstCheckDigit));
        assert_eq!(check("111.444.777-36"), Err(TaxIdError::SecondCheckDigit));
    }

    #[test]
    fn test_repeated_digits_always_rejected() {
        for d in 0..=9u8 {
            let id = punctuate(&[d; 11]);
            assert_eq!(check(&id), Err(TaxIdError::RepeatedDigits), "{id}");
        }
    }

    #[test]
    fn test_punctuation_is_required() {
        for id in [
            "11144477735",
            "111.444.777.35",
            "111-444-777-35",
            "111.444.77-735",
            " 111.444.777-35",
            "111.444.777-35 ",
            "111.444.777-3a",
            "",
        ] {
            assert_eq!(check(id), Err(TaxIdError::Format), "{id:?}");
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are Unicode \d but not ASCII
        assert_eq!(check("١١١.٤٤٤.٧٧٧-٣٥"), Err(TaxIdError::Format));
    }

    proptest! {
        #[test]
        fn prop_computed_check_digits_accepted(body in prop::array::uniform9(0u8..10)) {
            let digits = with_check_digits(body);
            let id = punctuate(&digits);
            if digits.iter().all(|&d| d == digits[0]) {
                prop_assert_eq!(check(&id), Err(TaxIdError::RepeatedDigits));
            } else {
                prop_assert_eq!(check(&id), Ok(()));
            }
        }

        #[test]
        fn prop_check_digit_mutation_rejected(
            body in prop::array::uniform9(0u8..10),
            pos in 9usize..11,
            delta in 1u8..10,
        ) {
            let mut digits = with_check_digits(body);
            digits[pos] = (digits[pos] + delta) % 10;
            prop_assert!(!is_valid(&punctuate(&digits)));
        }

        #[test]
        fn prop_matches_reference(digits in prop::array::uniform11(0u8..10)) {
            prop_assert_eq!(is_valid(&punctuate(&digits)), reference(&digits));
        }

        #[test]
        fn prop_body_mutation_matches_reference(
            body in prop::array::uniform9(0u8..10),
            pos in 0usize..9,
            delta in 1u8..10,
        ) {
            let mut digits = with_check_digits(body);
            digits[pos] = (digits[pos] + delta) % 10;
            prop_assert_eq!(is_valid(&punctuate(&digits)), reference(&digits));
        }
    }
}
