//! Digit extraction and zero-padding.

/// Strip every character that is not an ASCII decimal digit.
///
/// No length constraint is enforced here; the result may be empty.
pub(crate) fn clean(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Left-pad `digits` with `'0'` to exactly `len` characters.
/// Inputs already at or above `len` are returned unchanged.
pub(crate) fn pad_left(digits: &str, len: usize) -> String {
    format!("{digits:0>len$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(clean("111.444.777-35"), "11144477735");
        assert_eq!(clean("11.444.777/0001-61"), "11444777000161");
    }

    #[test]
    fn strips_letters_and_whitespace() {
        assert_eq!(clean(" 1a2b3c "), "123");
        assert_eq!(clean("not-a-number"), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn pads_short_input() {
        assert_eq!(pad_left("191", 11), "00000000191");
        assert_eq!(pad_left("", 11), "00000000000");
    }

    #[test]
    fn pad_leaves_full_length_alone() {
        assert_eq!(pad_left("11144477735", 11), "11144477735");
        assert_eq!(pad_left("111444777350", 11), "111444777350");
    }
}
