//! Canonical punctuated rendering and descriptive labels.

use super::digits::{clean, pad_left};
use super::types::DocumentKind;
use super::validation::{CNPJ_LEN, CPF_LEN, classify};

/// Render a digit string as a punctuated CPF, `DDD.DDD.DDD-DD`.
///
/// Non-digits are stripped and the result is left-zero-padded to 11
/// digits; no checksum validation is performed.
pub fn format_cpf(digits: &str) -> String {
    let d = pad_left(&clean(digits), CPF_LEN);
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Render a digit string as a punctuated CNPJ, `DD.DDD.DDD/DDDD-DD`.
///
/// Non-digits are stripped and the result is left-zero-padded to 14
/// digits; no checksum validation is performed.
pub fn format_cnpj(digits: &str) -> String {
    let d = pad_left(&clean(digits), CNPJ_LEN);
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// Format `input` according to its classified kind.
///
/// Invalid input is returned unchanged — a deliberate pass-through, not
/// an error.
pub fn format_document(input: &str) -> String {
    match classify(input) {
        DocumentKind::Cpf => format_cpf(input),
        DocumentKind::Cnpj => format_cnpj(input),
        DocumentKind::Invalid => input.to_string(),
    }
}

/// Document-kind label: `"CPF"`, `"CNPJ"`, or the generic `"CPF/CNPJ"`
/// when `input` is neither.
pub fn kind_label(input: &str) -> &'static str {
    match classify(input) {
        DocumentKind::Cpf => "CPF",
        DocumentKind::Cnpj => "CNPJ",
        DocumentKind::Invalid => "CPF/CNPJ",
    }
}

/// Holder-kind label: `"pessoa física"` for a CPF, `"pessoa jurídica"`
/// for a CNPJ, or the generic `"pessoa"`.
pub fn holder_label(input: &str) -> &'static str {
    match classify(input) {
        DocumentKind::Cpf => "pessoa física",
        DocumentKind::Cnpj => "pessoa jurídica",
        DocumentKind::Invalid => "pessoa",
    }
}
