use super::*;

// =============================================================
// Numbers
// =============================================================

#[test]
fn currency_groups_and_pads_cents() {
    assert_eq!(currency(1234.5), "$1,234.50");
    assert_eq!(currency(0.0), "$0.00");
    assert_eq!(currency(999.999), "$1,000.00");
    assert_eq!(currency(1_234_567.891), "$1,234,567.89");
}

#[test]
fn currency_places_sign_before_symbol() {
    assert_eq!(currency(-1234.5), "-$1,234.50");
    assert_eq!(currency(-0.001), "$0.00");
}

#[test]
fn currency_handles_non_finite_values() {
    assert_eq!(currency(f64::NAN), "$0.00");
}

#[test]
fn number_groups_thousands() {
    assert_eq!(number(12_345), "12,345");
    assert_eq!(number(999), "999");
    assert_eq!(number(1_000_000), "1,000,000");
    assert_eq!(number(-4_500), "-4,500");
    assert_eq!(number(0), "0");
}

#[test]
fn signed_number_marks_additions() {
    assert_eq!(signed_number(25), "+25");
    assert_eq!(signed_number(-3), "-3");
    assert_eq!(signed_number(0), "0");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_formats_plain_and_timestamped_input() {
    assert_eq!(date("2024-03-01"), "Mar 1, 2024");
    assert_eq!(date("2024-12-25T08:00:00"), "Dec 25, 2024");
}

#[test]
fn date_time_uses_twelve_hour_clock() {
    assert_eq!(date_time("2024-03-01T14:15:30"), "Mar 1, 02:15 PM");
    assert_eq!(date_time("2024-03-01T09:05:00.123456"), "Mar 1, 09:05 AM");
}

#[test]
fn date_time_accepts_offsets() {
    assert_eq!(date_time("2024-03-01T14:15:30Z"), "Mar 1, 02:15 PM");
}

#[test]
fn unparseable_input_is_echoed() {
    assert_eq!(date("soon"), "soon");
    assert_eq!(date_time("later"), "later");
}

#[test]
fn missing_dates_render_dash() {
    assert_eq!(date_or_dash(None), "\u{2014}");
    assert_eq!(date_or_dash(Some("")), "\u{2014}");
    assert_eq!(date_or_dash(Some("2024-01-02")), "Jan 2, 2024");
    assert_eq!(date_time_or_dash(None), "\u{2014}");
}
