//! Arabic-locale date rendering for table cells.

use chrono::NaiveDate;

/// Format a date as day/month/year with Eastern Arabic-Indic digits,
/// e.g. `١٥/٠٣/٢٠٢٤`.
pub fn format_date_arabic(date: NaiveDate) -> String {
    date.format("%d/%m/%Y")
        .to_string()
        .chars()
        .map(to_arabic_digit)
        .collect()
}

fn to_arabic_digit(c: char) -> char {
    match c {
        '0'..='9' => {
            // U+0660 is ARABIC-INDIC DIGIT ZERO.
            let offset = c as u32 - '0' as u32;
            char::from_u32(0x0660 + offset).unwrap_or(c)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_arabic_digits() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date_arabic(date), "١٥/٠٣/٢٠٢٤");
    }

    #[test]
    fn pads_single_digit_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_date_arabic(date), "٠٥/٠١/٢٠٢٣");
    }
}
