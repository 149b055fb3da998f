//! # cadastro
//!
//! Validation, classification and formatting of the two Brazilian taxpayer
//! registry numbers: **CPF** (Cadastro de Pessoas Físicas, 11 digits, natural
//! persons) and **CNPJ** (Cadastro Nacional da Pessoa Jurídica, 14 digits,
//! legal entities).
//!
//! Every function is pure: no I/O, no global state, no panics. Malformed
//! input never raises — it resolves to `false`, [`DocumentKind::Invalid`],
//! or an unchanged pass-through string. Callers who want the failure reason
//! use the typed layer ([`Cpf::parse`], [`Cnpj::parse`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::*;
//!
//! assert!(is_valid_cpf("111.444.777-35"));
//! assert_eq!(classify("11444777000161"), DocumentKind::Cnpj);
//! assert_eq!(format_document("11144477735"), "111.444.777-35");
//!
//! let cpf: Cpf = "11144477735".parse().unwrap();
//! assert_eq!(cpf.to_string(), "111.444.777-35");
//! ```

pub mod core;

// Re-export core types at crate root for convenience
pub use crate::core::*;
