//! Formatting helpers for presenting the dashboard report.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime, UtcOffset,
};

/// Compact `YYYY-MM-DD · HH:MM UTC` label for an RFC 3339 timestamp.
///
/// Unparseable input is shown as-is, cut at the seconds.
pub fn format_generated_at(iso: &str) -> String {
    if let Ok(stamp) = OffsetDateTime::parse(iso, &Rfc3339) {
        let utc = stamp.to_offset(UtcOffset::UTC);
        let date = utc.format(&format_description!("[year]-[month]-[day]"));
        let clock = utc.format(&format_description!("[hour]:[minute]"));
        if let (Ok(date), Ok(clock)) = (date, clock) {
            return format!("{date} · {clock} UTC");
        }
    }

    let (date, time_segment) = iso.split_once('T').unwrap_or((iso, ""));
    let time_display: String = time_segment.chars().take(5).collect();
    if time_display.is_empty() {
        date.to_string()
    } else {
        format!("{date} · {time_display}")
    }
}

pub fn format_players(count: usize) -> String {
    match count {
        1 => "1 player".to_string(),
        n => format!("{n} players"),
    }
}

pub fn format_levels(count: usize) -> String {
    match count {
        0 => "no levels".to_string(),
        1 => "1 level".to_string(),
        n => format!("{n} levels"),
    }
}

/// Note shown under a chart built from partial data.
pub fn skipped_note(skipped: usize) -> Option<String> {
    match skipped {
        0 => None,
        1 => Some("1 record was skipped because of a missing or malformed field.".to_string()),
        n => Some(format!(
            "{n} records were skipped because of missing or malformed fields."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_at_is_shown_in_utc() {
        assert_eq!(
            format_generated_at("2026-10-18T14:03:27.512Z"),
            "2026-10-18 · 14:03 UTC"
        );
        assert_eq!(
            format_generated_at("2026-10-18T16:03:27+02:00"),
            "2026-10-18 · 14:03 UTC"
        );
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_raw_parts() {
        assert_eq!(format_generated_at("2026-10-18T14:03:27"), "2026-10-18 · 14:03");
        assert_eq!(format_generated_at("yesterday"), "yesterday");
        assert_eq!(format_generated_at(""), "");
    }

    #[test]
    fn counts_are_pluralized() {
        assert_eq!(format_players(0), "0 players");
        assert_eq!(format_players(1), "1 player");
        assert_eq!(format_players(12), "12 players");
        assert_eq!(format_levels(0), "no levels");
        assert_eq!(format_levels(1), "1 level");
        assert_eq!(format_levels(4), "4 levels");
    }

    #[test]
    fn skipped_note_only_when_records_were_dropped() {
        assert_eq!(skipped_note(0), None);
        assert!(skipped_note(1).unwrap().starts_with("1 record was"));
        assert!(skipped_note(3).unwrap().starts_with("3 records were"));
    }
}
