//! CNPJ formatting helpers. A CNPJ is 14 digits, displayed as
//! `AA.AAA.AAA/AAAA-AA` (2-3-3-4-2 groups, 18 characters total).

/// Apply the display mask incrementally as digits accumulate. Inputs holding
/// more than 14 digits are returned untouched; the input field itself caps
/// the visible length at 18 characters.
pub fn format_cnpj(value: &str) -> String {
    let digits = strip_cnpj(value);
    if digits.len() > 14 {
        return value.to_string();
    }

    let mut masked = String::with_capacity(18);
    for (i, c) in digits.chars().enumerate() {
        match i {
            2 | 5 => masked.push('.'),
            8 => masked.push('/'),
            12 => masked.push('-'),
            _ => {}
        }
        masked.push(c);
    }
    masked
}

/// Drop everything that is not an ASCII digit.
pub fn strip_cnpj(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A CNPJ is submittable when it holds exactly 14 digits.
pub fn is_valid_cnpj(value: &str) -> bool {
    strip_cnpj(value).len() == 14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_a_full_cnpj() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn masks_partial_input_incrementally() {
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_cnpj("1"), "1");
        assert_eq!(format_cnpj("11"), "11");
        assert_eq!(format_cnpj("112"), "11.2");
        assert_eq!(format_cnpj("11222"), "11.222");
        assert_eq!(format_cnpj("112223"), "11.222.3");
        assert_eq!(format_cnpj("11222333"), "11.222.333");
        assert_eq!(format_cnpj("112223330"), "11.222.333/0");
        assert_eq!(format_cnpj("112223330001"), "11.222.333/0001");
        assert_eq!(format_cnpj("1122233300018"), "11.222.333/0001-8");
    }

    #[test]
    fn remasking_a_masked_value_is_idempotent() {
        let once = format_cnpj("11222333000181");
        let twice = format_cnpj(&once);
        assert_eq!(once, twice);

        let partial = format_cnpj("11222");
        assert_eq!(format_cnpj(&partial), partial);
    }

    #[test]
    fn passes_oversized_input_through_unmodified() {
        assert_eq!(format_cnpj("112223330001815"), "112223330001815");
        assert_eq!(format_cnpj("11.222.333/0001-815"), "11.222.333/0001-815");
    }

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(strip_cnpj("11.222.333/0001-81"), "11222333000181");
        assert_eq!(strip_cnpj("abc"), "");
    }

    #[test]
    fn validity_is_exactly_fourteen_digits() {
        assert!(is_valid_cnpj("11.222.333/0001-81"));
        assert!(!is_valid_cnpj("11.222.333/0001-8"));
        assert!(!is_valid_cnpj("112223330001811"));
        assert!(!is_valid_cnpj(""));
    }
}
