//! Rendering of API results for the terminal.

use serde::Serialize;

use holidays_core::Holiday;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Renders the answer of `is-holiday`.
pub fn render_is_holiday(
    date: &str,
    is_holiday: bool,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "date": date,
            "isHoliday": is_holiday,
        })),
        OutputFormat::Text if is_holiday => Ok(format!("{} is a holiday", date)),
        OutputFormat::Text => Ok(format!("{} is not a holiday", date)),
    }
}

/// Renders a list of holidays, one per line in text mode.
pub fn render_holidays(holidays: &[Holiday], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(&holidays),
        OutputFormat::Text if holidays.is_empty() => Ok("No holidays".to_string()),
        OutputFormat::Text => Ok(holidays
            .iter()
            .map(holiday_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Renders the optional next holiday.
pub fn render_next(holiday: Option<&Holiday>, format: OutputFormat) -> serde_json::Result<String> {
    match (format, holiday) {
        (OutputFormat::Json, holiday) => to_json(&holiday),
        (OutputFormat::Text, Some(holiday)) => Ok(holiday_line(holiday)),
        (OutputFormat::Text, None) => Ok("No upcoming holiday".to_string()),
    }
}

fn holiday_line(holiday: &Holiday) -> String {
    let kind = if holiday.is_national() {
        "national"
    } else {
        "other"
    };
    format!("{}  {} ({})", holiday.date(), holiday.name(), kind)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holidays() -> Vec<Holiday> {
        serde_json::from_str(
            r#"[
                {"date": "2024-12-24", "name": "Juleaftensdag", "nationalHoliday": false},
                {"date": "2024-12-25", "name": "1. juledag", "nationalHoliday": true}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn is_holiday_text() {
        assert_eq!(
            render_is_holiday("2024-12-25", true, OutputFormat::Text).unwrap(),
            "2024-12-25 is a holiday"
        );
        assert_eq!(
            render_is_holiday("2024-12-27", false, OutputFormat::Text).unwrap(),
            "2024-12-27 is not a holiday"
        );
    }

    #[test]
    fn is_holiday_json() {
        let out = render_is_holiday("2024-12-25", true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["date"], "2024-12-25");
        assert_eq!(value["isHoliday"], true);
    }

    #[test]
    fn holidays_text_lines() {
        let out = render_holidays(&holidays(), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "2024-12-24  Juleaftensdag (other)\n2024-12-25  1. juledag (national)"
        );
        assert_eq!(
            render_holidays(&[], OutputFormat::Text).unwrap(),
            "No holidays"
        );
    }

    #[test]
    fn holidays_json_uses_wire_names() {
        let out = render_holidays(&holidays(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["nationalHoliday"], true);
    }

    #[test]
    fn next_rendering() {
        let list = holidays();
        assert_eq!(
            render_next(list.first(), OutputFormat::Text).unwrap(),
            "2024-12-24  Juleaftensdag (other)"
        );
        assert_eq!(
            render_next(None, OutputFormat::Text).unwrap(),
            "No upcoming holiday"
        );
        assert_eq!(render_next(None, OutputFormat::Json).unwrap(), "null");
    }
}
