//! Форматирование чисел для таблиц и итоговых строк

/// Groups the integer part by thousands with a space: `1234567.891, 2` → "1 234 567.89".
/// More than three decimals are not used anywhere, so they are capped at 3.
pub fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals.min(3), value);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    // "-0.00" reads odd in a totals row
    let sign = if grouped.chars().all(|c| c == '0' || c == ' ')
        && frac_part.map_or(true, |f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number(value, 2)
}

pub fn format_count(value: usize) -> String {
    format_number(value as f64, 0)
}

/// Attendance share, one decimal: 66.7 → "66.7%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.5), "-1 234.50");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(999.0), "999.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1000), "1 000");
        assert_eq!(format_count(25), "25");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(66.66), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
