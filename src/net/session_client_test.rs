use super::*;

// =============================================================
// Refresh schedule
// =============================================================

#[test]
fn refresh_interval_is_23_hours() {
    assert_eq!(REFRESH_INTERVAL_SECS, 82_800);
}

#[test]
fn refresh_interval_is_inside_the_assumed_token_lifetime() {
    // Access tokens are assumed to live ~24h; the schedule must rotate
    // them strictly before that.
    assert!(REFRESH_INTERVAL_SECS < 24 * 60 * 60);
}
