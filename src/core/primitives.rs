use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::{ChartError, ChartResult};

/// Estimated text width in em units: ASCII counts as half an em, anything
/// else as a full em.
///
/// This is an approximation, not font metrics; labels laid out with it can
/// be off by a few pixels for proportional fonts.
#[must_use]
pub fn text_units(text: &str) -> f64 {
    text.chars()
        .map(|c| if (c as u32) < 128 { 0.5 } else { 1.0 })
        .sum()
}

#[must_use]
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text_units(text) * font_size
}

/// Formats a millisecond timestamp (UTC) using a small token language.
///
/// The first occurrence of each of `YYYY`, `MM`, `DD`, `HH` and `mm` is
/// replaced with the zero-padded component.
pub fn format_time(time_ms: i64, format: &str) -> ChartResult<String> {
    let date = DateTime::<Utc>::from_timestamp_millis(time_ms).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {time_ms} is out of range"))
    })?;

    let mut out = format.to_owned();
    for (token, value) in [
        ("YYYY", format!("{:04}", date.year())),
        ("MM", format!("{:02}", date.month())),
        ("DD", format!("{:02}", date.day())),
        ("HH", format!("{:02}", date.hour())),
        ("mm", format!("{:02}", date.minute())),
    ] {
        out = out.replacen(token, &value, 1);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{estimate_text_width, format_time, text_units};

    #[test]
    fn text_units_weigh_ascii_as_half() {
        assert_eq!(text_units("ab"), 1.0);
        assert_eq!(text_units("播放"), 2.0);
        assert_eq!(text_units("a播"), 1.5);
        assert_eq!(estimate_text_width("MM-DD", 12.0), 30.0);
    }

    #[test]
    fn format_time_replaces_month_and_day() {
        // 2019-04-01T12:12:48.876Z
        let formatted = format_time(1_554_120_768_876, "MM-DD").expect("format");
        assert_eq!(formatted, "04-01");
        let full = format_time(1_554_120_768_876, "YYYY/MM/DD HH:mm").expect("format");
        assert_eq!(full, "2019/04/01 12:12");
    }
}
