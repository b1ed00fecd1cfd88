/// Accepted digit-count range for a canonical phone, bounds inclusive.
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Normalize a raw phone value into canonical `+<digits>` form.
///
/// Returns `None` when the value carries no usable phone at all. A bare
/// 10-digit number gets the default country code prepended; numbers already
/// starting with `+` are passed through digit-stripped, with no further
/// validation here (the pipeline applies the digit-count filter afterwards).
pub fn normalize_phone(raw: &str, country: &str) -> Option<String> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if stripped.is_empty() || stripped == "+" {
        return None;
    }

    if stripped.starts_with('+') {
        return Some(stripped);
    }

    let digits: String = stripped.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let c = country.trim_start_matches('+');
    // 只有「剛好 10 位且未帶國碼」的號碼才補預設國碼，其餘長度不猜測
    if !c.is_empty() && !digits.starts_with(c) && digits.len() == 10 {
        Some(format!("+{}{}", c, digits))
    } else {
        Some(format!("+{}", digits))
    }
}

pub fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_number_gets_country_code() {
        assert_eq!(
            normalize_phone("555-123-4567", "+1"),
            Some("+15551234567".to_string())
        );
    }

    #[test]
    fn test_plus_prefixed_number_passed_through() {
        assert_eq!(
            normalize_phone("+44 20 7946 0958", "+1"),
            Some("+442079460958".to_string())
        );
    }

    #[test]
    fn test_empty_and_whitespace_yield_none() {
        assert_eq!(normalize_phone("", "+1"), None);
        assert_eq!(normalize_phone("   ", "+1"), None);
    }

    #[test]
    fn test_bare_plus_yields_none() {
        assert_eq!(normalize_phone("+", "+1"), None);
        assert_eq!(normalize_phone(" + - ", "+1"), None);
    }

    #[test]
    fn test_no_digits_yields_none() {
        assert_eq!(normalize_phone("n/a", "+1"), None);
        assert_eq!(normalize_phone("---", "+1"), None);
    }

    #[test]
    fn test_short_number_not_prefixed() {
        // 非 10 位不補國碼，照原樣加 '+'
        assert_eq!(normalize_phone("123", "+1"), Some("+123".to_string()));
    }

    #[test]
    fn test_eleven_digits_not_prefixed() {
        assert_eq!(
            normalize_phone("15551234567", "+1"),
            Some("+15551234567".to_string())
        );
    }

    #[test]
    fn test_digits_already_starting_with_country_code() {
        // 10 位但已以國碼開頭：不重複補
        assert_eq!(
            normalize_phone("4420794609", "+44"),
            Some("+4420794609".to_string())
        );
    }

    #[test]
    fn test_empty_country_code_never_prefixes() {
        assert_eq!(
            normalize_phone("5551234567", ""),
            Some("+5551234567".to_string())
        );
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(
            normalize_phone("(555) 123-4567", "+1"),
            Some("+15551234567".to_string())
        );
    }

    #[test]
    fn test_digit_count_ignores_plus() {
        assert_eq!(digit_count("+15551234567"), 11);
        assert_eq!(digit_count("+"), 0);
    }
}
