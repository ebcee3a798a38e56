//! Brazilian Portuguese formatting of appointment times.

use chrono::{DateTime, Datelike, FixedOffset, Local, Locale, TimeZone, Weekday};

const LOCALE: Locale = Locale::pt_BR;

/// Full weekday name, lowercase, e.g. `segunda-feira`. Weekend days carry
/// no `-feira`.
pub fn weekday_name(date: &DateTime<FixedOffset>) -> String {
    let day = date.format_localized("%A", LOCALE).to_string();
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => day,
        _ => format!("{day}-feira"),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts epoch milliseconds to wall time at `offset`, or at the local
/// offset of the system when `offset` is `None`.
pub fn local_time(millis: i64, offset: Option<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    match offset {
        Some(offset) => offset.timestamp_millis_opt(millis).single(),
        None => Local.timestamp_millis_opt(millis).single().map(|d| {
            let offset = *d.offset();
            d.with_timezone(&offset)
        }),
    }
}

/// Sentence confirming an appointment, e.g.
/// `Segunda-feira, dia 04 de março de 2024 às 15:30h com Bob`.
///
/// Missing provider name leaves the end of the sentence empty.
pub fn describe_appointment(date: &DateTime<FixedOffset>, provider_name: Option<&str>) -> String {
    format!(
        "{}, {}h com {}",
        capitalize(&weekday_name(date)),
        date.format_localized("dia %d de %B de %Y às %H:%M", LOCALE),
        provider_name.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        offset.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn describes_weekday_appointment() {
        assert_eq!(
            describe_appointment(&at(2024, 3, 4, 15, 30), Some("Bob")),
            "Segunda-feira, dia 04 de março de 2024 às 15:30h com Bob"
        );
    }

    #[test]
    fn weekends_have_no_feira() {
        assert_eq!(
            describe_appointment(&at(2024, 3, 9, 8, 5), Some("Ana")),
            "Sábado, dia 09 de março de 2024 às 08:05h com Ana"
        );
        assert_eq!(
            describe_appointment(&at(2024, 12, 1, 23, 0), Some("Ana")),
            "Domingo, dia 01 de dezembro de 2024 às 23:00h com Ana"
        );
    }

    #[test]
    fn missing_provider_leaves_name_empty() {
        assert_eq!(
            describe_appointment(&at(2024, 3, 5, 9, 0), None),
            "Terça-feira, dia 05 de março de 2024 às 09:00h com "
        );
    }

    #[test]
    fn names_every_weekday() {
        let names: Vec<_> = (4..=10).map(|d| weekday_name(&at(2024, 3, d, 12, 0))).collect();
        assert_eq!(
            names,
            [
                "segunda-feira",
                "terça-feira",
                "quarta-feira",
                "quinta-feira",
                "sexta-feira",
                "sábado",
                "domingo",
            ]
        );
    }

    #[test]
    fn months_are_lowercase() {
        assert_eq!(
            describe_appointment(&at(2024, 2, 1, 10, 0), Some("Bob")),
            "Quinta-feira, dia 01 de fevereiro de 2024 às 10:00h com Bob"
        );
    }

    #[test]
    fn millis_follow_offset() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        // 2024-03-04T18:30:00Z
        let date = local_time(1_709_577_000_000, Some(offset)).unwrap();
        assert_eq!(date, at(2024, 3, 4, 15, 30));
    }
}
