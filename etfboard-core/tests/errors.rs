use etfboard_core::Error;

#[test]
fn invalid_range_maps_to_400() {
    assert_eq!(Error::invalid_range("start after end").status(), 400);
}

#[test]
fn rate_limited_maps_to_429() {
    assert_eq!(Error::rate_limited("yahoo", "slow down").status(), 429);
}

#[test]
fn connector_and_internal_failures_map_to_500() {
    assert_eq!(Error::connector("yahoo", "SPY", "boom").status(), 500);
    assert_eq!(Error::Data("truncated payload".into()).status(), 500);
    assert_eq!(Error::Other("??".into()).status(), 500);
}

#[test]
fn connector_error_names_the_symbol() {
    let err = Error::connector("yahoo", "TLT", "http 503");
    let text = err.to_string();
    assert!(text.contains("yahoo"));
    assert!(text.contains("TLT"));
}
