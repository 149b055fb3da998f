//! CPF/CNPJ validation and classification.

use super::checksum::{
    CNPJ_WEIGHTS_FIRST, CNPJ_WEIGHTS_SECOND, CPF_WEIGHTS_FIRST, CPF_WEIGHTS_SECOND, check_digit,
};
use super::digits::{clean, pad_left};
use super::error::DocumentError;
use super::types::DocumentKind;

/// CPF canonical length after zero-padding.
pub const CPF_LEN: usize = 11;

/// CNPJ canonical length after zero-padding.
pub const CNPJ_LEN: usize = 14;

/// Shared validation pipeline for both document kinds.
///
/// Returns the canonical zero-padded digit string on success.
fn validate_digits(
    input: &str,
    len: usize,
    first_weights: &[u32],
    second_weights: &[u32],
) -> Result<String, DocumentError> {
    let digits = clean(input);
    if digits.len() > len {
        return Err(DocumentError::TooLong {
            len: digits.len(),
            max: len,
        });
    }
    let padded = pad_left(&digits, len);

    // All-same sequences like "00000000000" can satisfy the checksum
    // arithmetic but are never issued.
    let first_byte = padded.as_bytes()[0];
    if padded.bytes().all(|b| b == first_byte) {
        return Err(DocumentError::RepeatedDigits);
    }

    let body = &padded[..len - 2];
    let body_with_first = &padded[..len - 1];
    let stored_first = padded.as_bytes()[len - 2] as char;
    let stored_second = padded.as_bytes()[len - 1] as char;

    // The second expected digit is computed over the body plus the
    // *stored* first digit. Both comparisons are required independently:
    // a wrong first digit fails the check even when the second digit is
    // consistent with it.
    let expected_first = check_digit(body, first_weights);
    let expected_second = check_digit(body_with_first, second_weights);

    if stored_first == expected_first && stored_second == expected_second {
        Ok(padded)
    } else {
        Err(DocumentError::InvalidCheckDigit)
    }
}

/// Validate `input` as a CPF, returning the canonical 11-digit string.
pub(crate) fn validate_cpf_digits(input: &str) -> Result<String, DocumentError> {
    validate_digits(input, CPF_LEN, &CPF_WEIGHTS_FIRST, &CPF_WEIGHTS_SECOND)
}

/// Validate `input` as a CNPJ, returning the canonical 14-digit string.
pub(crate) fn validate_cnpj_digits(input: &str) -> Result<String, DocumentError> {
    validate_digits(input, CNPJ_LEN, &CNPJ_WEIGHTS_FIRST, &CNPJ_WEIGHTS_SECOND)
}

/// Check whether `input` is a structurally valid CPF.
///
/// Non-digit characters are ignored; fewer than 11 digits are
/// left-zero-padded, more than 11 fail. Never panics.
pub fn is_valid_cpf(input: &str) -> bool {
    validate_cpf_digits(input).is_ok()
}

/// Check whether `input` is a structurally valid CNPJ.
///
/// Non-digit characters are ignored; fewer than 14 digits are
/// left-zero-padded, more than 14 fail. Never panics.
pub fn is_valid_cnpj(input: &str) -> bool {
    validate_cnpj_digits(input).is_ok()
}

/// Classify `input` as a CPF, a CNPJ, or neither.
///
/// CPF is tried first, so it wins if an input could coincidentally
/// satisfy both checks.
pub fn classify(input: &str) -> DocumentKind {
    if is_valid_cpf(input) {
        DocumentKind::Cpf
    } else if is_valid_cnpj(input) {
        DocumentKind::Cnpj
    } else {
        DocumentKind::Invalid
    }
}
