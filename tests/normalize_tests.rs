use rtaboard::core::normalize::{
    MAX_DURATION_SECS, format_duration, format_seconds, normalize_to_seconds, parse_hms,
};
use rtaboard::models::cell::Cell;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

#[test]
fn test_empty_cells_are_zero() {
    assert_eq!(normalize_to_seconds(&Cell::Empty), 0);
    assert_eq!(normalize_to_seconds(&text("")), 0);
    assert_eq!(normalize_to_seconds(&text("   ")), 0);
}

#[test]
fn test_colon_strings() {
    assert_eq!(normalize_to_seconds(&text("01:02:03")), 3723);
    assert_eq!(normalize_to_seconds(&text("00:90:00")), 5400);
    assert_eq!(normalize_to_seconds(&text("2:30")), 9000);
    assert_eq!(normalize_to_seconds(&text(" 00:00:45 ")), 45);
    assert_eq!(normalize_to_seconds(&text("120:00:00")), 432_000);
}

#[test]
fn test_colon_string_with_garbage_is_zero() {
    assert_eq!(normalize_to_seconds(&text("aa:bb:cc")), 0);
    assert_eq!(normalize_to_seconds(&text("01:xx:00")), 0);
}

#[test]
fn test_negative_colon_total_clamps() {
    assert_eq!(normalize_to_seconds(&text("-01:00:00")), 0);
}

#[test]
fn test_day_fractions() {
    assert_eq!(normalize_to_seconds(&Cell::Number(0.5)), 43_200);
    assert_eq!(normalize_to_seconds(&Cell::Number(1.0 / 24.0)), 3600);
    assert_eq!(normalize_to_seconds(&text("0.25")), 21_600);
}

#[test]
fn test_whole_numbers_are_seconds() {
    assert_eq!(normalize_to_seconds(&Cell::Number(1.0)), 1);
    assert_eq!(normalize_to_seconds(&Cell::Number(3600.0)), 3600);
    assert_eq!(normalize_to_seconds(&Cell::Number(59.6)), 60);
    assert_eq!(normalize_to_seconds(&text("1800")), 1800);
}

#[test]
fn test_negative_and_non_numeric_are_zero() {
    assert_eq!(normalize_to_seconds(&Cell::Number(-30.0)), 0);
    assert_eq!(normalize_to_seconds(&Cell::Number(f64::NAN)), 0);
    assert_eq!(normalize_to_seconds(&text("n/a")), 0);
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(0), "00:00:00");
    assert_eq!(format_seconds(3723), "01:02:03");
    assert_eq!(format_seconds(-5), "00:00:00");
    assert_eq!(format_seconds(360_000), "100:00:00");
}

#[test]
fn test_format_is_idempotent_on_normalized_values() {
    for raw in ["00:00:00", "01:02:03", "08:00:00", "23:59:59", "100:00:01"] {
        let once = format_seconds(normalize_to_seconds(&text(raw)) as i64);
        let twice = format_seconds(normalize_to_seconds(&text(&once)) as i64);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_parse_hms_inverse_of_format() {
    for secs in [0_u64, 59, 3600, 24_000, 86_399, 400_000] {
        assert_eq!(parse_hms(&format_seconds(secs as i64)), Some(secs));
    }
    assert_eq!(parse_hms("x:00"), None);
}

#[test]
fn test_cell_from_raw() {
    assert_eq!(Cell::from_raw(""), Cell::Empty);
    assert_eq!(Cell::from_raw(" 42 "), Cell::Number(42.0));
    assert_eq!(Cell::from_raw("00:30:00"), text("00:30:00"));
    assert_eq!(Cell::from_raw("inf"), text("inf"));
}

#[test]
fn test_oversized_values_are_capped() {
    assert_eq!(normalize_to_seconds(&Cell::Number(1e19)), MAX_DURATION_SECS);
    assert_eq!(normalize_to_seconds(&text("1e19")), MAX_DURATION_SECS);
    assert_eq!(normalize_to_seconds(&text("99999999999:00:00")), MAX_DURATION_SECS);
    assert_eq!(parse_hms("9223372036854775807:59:59"), Some(MAX_DURATION_SECS));
}

#[test]
fn test_format_duration_never_wraps() {
    assert_eq!(format_duration(3723), "01:02:03");
    assert_eq!(format_duration(MAX_DURATION_SECS), "1193046:28:15");
    assert_ne!(format_duration(u64::MAX), "00:00:00");
    assert_eq!(format_duration(u64::MAX), format_seconds(i64::MAX));
}
