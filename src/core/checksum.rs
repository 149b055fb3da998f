//! Base-11 weighted check-digit computation shared by CPF and CNPJ.

/// Modulus for both check digits of both document kinds.
const DIVISOR: u32 = 11;

/// Weights for the first CPF check digit (9-digit body).
pub(crate) const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CPF check digit (body + first check digit).
pub(crate) const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the first CNPJ check digit (12-digit body).
/// CNPJ weights cycle back to 9 after reaching 2 rather than descending
/// straight through.
pub(crate) const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ check digit (body + first check digit).
pub(crate) const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one check digit over `digits` with the given weight table.
///
/// `digits` must be ASCII digits with `digits.len() == weights.len()`.
/// The second check digit of a document is computed over the body *plus
/// the stored first digit*; the second weight tables encode that offset,
/// so first must be appended before second is computed.
pub(crate) fn check_digit(digits: &str, weights: &[u32]) -> char {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .bytes()
        .zip(weights)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    let rem = sum % DIVISOR;
    if rem < 2 {
        '0'
    } else {
        char::from(b'0' + (DIVISOR - rem) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_first_digit() {
        assert_eq!(check_digit("111444777", &CPF_WEIGHTS_FIRST), '3');
    }

    #[test]
    fn cpf_second_digit_uses_stored_first() {
        assert_eq!(check_digit("1114447773", &CPF_WEIGHTS_SECOND), '5');
    }

    #[test]
    fn cnpj_first_digit() {
        assert_eq!(check_digit("114447770001", &CNPJ_WEIGHTS_FIRST), '6');
    }

    #[test]
    fn cnpj_second_digit() {
        assert_eq!(check_digit("1144477700016", &CNPJ_WEIGHTS_SECOND), '1');
    }

    #[test]
    fn remainder_below_two_maps_to_zero() {
        // sum = 0 → rem 0 → '0'
        assert_eq!(check_digit("000000000", &CPF_WEIGHTS_FIRST), '0');
    }

    #[test]
    fn weight_tables_length_match_inputs() {
        assert_eq!(CPF_WEIGHTS_FIRST.len(), 9);
        assert_eq!(CPF_WEIGHTS_SECOND.len(), 10);
        assert_eq!(CNPJ_WEIGHTS_FIRST.len(), 12);
        assert_eq!(CNPJ_WEIGHTS_SECOND.len(), 13);
    }
}
