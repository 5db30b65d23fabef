//! Birth-date parsing for residency records.

use chrono::NaiveDate;

/// Parse the date-of-birth text of a residency record.
///
/// The source data encodes birth dates two ways: a bare four-digit birth
/// year (older records), and a full `dd/MM/yyyy` date. Text length four
/// selects the year-only interpretation, with month and day defaulting to
/// January 1st. Anything else must match the full layout exactly; no other
/// formats are recognized.
#[must_use]
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    if text.len() == 4 {
        parse_bare_year(text)
    } else {
        parse_day_month_year(text)
    }
}

fn parse_bare_year(s: &str) -> Option<NaiveDate> {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = s.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn parse_day_month_year(s: &str) -> Option<NaiveDate> {
    // chrono's %d/%m/%Y also accepts single-digit fields and signed years;
    // the layout check keeps the two-digit-day/two-digit-month/four-digit-year
    // contract exact
    if s.len() != 10 {
        return None;
    }
    let layout_ok = s.chars().enumerate().all(|(i, c)| match i {
        2 | 5 => c == '/',
        _ => c.is_ascii_digit(),
    });
    if !layout_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}
