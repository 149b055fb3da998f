//! CPF/CNPJ checksum validation, classification and formatting.
//!
//! Both registry numbers carry two trailing base-11 weighted-sum check
//! digits; the algorithms differ only in length and weight table.

mod checksum;
mod digits;
mod error;
mod format;
mod types;
mod validation;

pub use error::*;
pub use format::*;
pub use types::*;
pub use validation::*;
