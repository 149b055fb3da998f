use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::format::{format_cnpj, format_cpf};
use super::validation::{validate_cnpj_digits, validate_cpf_digits};

/// Classification of an arbitrary input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Structurally valid 11-digit natural-person registry number.
    Cpf,
    /// Structurally valid 14-digit legal-entity registry number.
    Cnpj,
    /// Neither a valid CPF nor a valid CNPJ.
    Invalid,
}

/// A validated CPF, stored as its canonical 11-digit string.
///
/// Constructible only through validation, so a held value is always
/// structurally valid. Serializes as the canonical digit string;
/// `Display` renders the punctuated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Validate `input` (punctuation ignored, short input zero-padded)
    /// and return the canonical CPF.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        validate_cpf_digits(input).map(Self)
    }

    /// The canonical 11-digit string, without punctuation.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// The canonical punctuated form, `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// A validated CNPJ, stored as its canonical 14-digit string.
///
/// Same guarantees as [`Cpf`]; `Display` renders `DD.DDD.DDD/DDDD-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Validate `input` (punctuation ignored, short input zero-padded)
    /// and return the canonical CNPJ.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        validate_cnpj_digits(input).map(Self)
    }

    /// The canonical 14-digit string, without punctuation.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// The canonical punctuated form, `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_parse_canonicalizes() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        assert_eq!(cpf.as_digits(), "11144477735");
        assert_eq!(cpf.to_string(), "111.444.777-35");
    }

    #[test]
    fn cpf_parse_pads() {
        let cpf: Cpf = "191".parse().unwrap();
        assert_eq!(cpf.as_digits(), "00000000191");
        assert_eq!(cpf.to_string(), "000.000.001-91");
    }

    #[test]
    fn cpf_parse_rejects_bad_checksum() {
        assert_eq!(
            Cpf::parse("11144477736"),
            Err(DocumentError::InvalidCheckDigit)
        );
    }

    #[test]
    fn cnpj_parse_canonicalizes() {
        let cnpj = Cnpj::parse("11.444.777/0001-61").unwrap();
        assert_eq!(cnpj.as_digits(), "11444777000161");
        assert_eq!(cnpj.to_string(), "11.444.777/0001-61");
    }

    #[test]
    fn cnpj_parse_rejects_repeated() {
        assert_eq!(
            Cnpj::parse("00000000000000"),
            Err(DocumentError::RepeatedDigits)
        );
    }
}
