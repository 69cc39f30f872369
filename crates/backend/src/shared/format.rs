/// Размер ответа для лога запросов: триады через точку, `1.234.567`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut parts: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        parts.push(&digits[..head]);
    }
    let mut start = head;
    while start < digits.len() {
        parts.push(&digits[start..start + 3]);
        start += 3;
    }
    parts.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(123456), "123.456");
        assert_eq!(format_number(1234567), "1.234.567");
    }
}
