use thiserror::Error;

/// Why an input failed to parse as a CPF or CNPJ.
///
/// The boolean validators and [`classify`](crate::classify) never surface
/// this type; it exists for the typed layer ([`Cpf::parse`](crate::Cpf),
/// [`Cnpj::parse`](crate::Cnpj)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// More digits than the document kind allows. Oversized input is
    /// rejected rather than silently truncated.
    #[error("too many digits: got {len}, expected at most {max}")]
    TooLong {
        /// Digit count after stripping punctuation.
        len: usize,
        /// Target length for the document kind (11 or 14).
        max: usize,
    },

    /// Every digit of the padded number is identical (e.g. "00000000000").
    /// Such sequences satisfy the checksum arithmetic for some weight
    /// tables but are never issued.
    #[error("all digits identical")]
    RepeatedDigits,

    /// One or both check digits do not match the weighted-sum computation.
    #[error("check digit mismatch")]
    InvalidCheckDigit,
}
