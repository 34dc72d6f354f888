use super::*;

#[test]
fn resolve_root_is_portfolio() {
    assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Portfolio));
}

#[test]
fn resolve_balloons_landing_page() {
    assert_eq!(AppRoute::resolve("/ellie-piper/balloons"), Some(AppRoute::ElliePiperBalloons));
}

#[test]
fn resolve_tolerates_trailing_slash() {
    assert_eq!(AppRoute::resolve("/ellie-piper/balloons/"), Some(AppRoute::ElliePiperBalloons));
}

#[test]
fn resolve_ignores_query_and_fragment() {
    assert_eq!(AppRoute::resolve("/?ref=card"), Some(AppRoute::Portfolio));
    assert_eq!(AppRoute::resolve("/ellie-piper/balloons#services"), Some(AppRoute::ElliePiperBalloons));
}

#[test]
fn resolve_rejects_unknown_paths() {
    assert_eq!(AppRoute::resolve("/foo"), None);
    assert_eq!(AppRoute::resolve("/ellie-piper"), None);
    assert_eq!(AppRoute::resolve("/ellie-piper/balloons/extra"), None);
    assert_eq!(AppRoute::resolve(""), None);
}

#[test]
fn resolve_is_case_sensitive() {
    assert_eq!(AppRoute::resolve("/Ellie-Piper/Balloons"), None);
}

#[test]
fn path_round_trips_through_resolve() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::resolve(route.path()), Some(route));
    }
}

#[test]
fn balloons_path_matches_router_segments() {
    let joined = format!("/{ELLIE_PIPER_SEGMENT}/{BALLOONS_SEGMENT}");
    assert_eq!(joined, AppRoute::ElliePiperBalloons.path());
}

#[test]
fn titles_are_distinct() {
    assert_ne!(AppRoute::Portfolio.title(), AppRoute::ElliePiperBalloons.title());
    assert_ne!(AppRoute::Portfolio.title(), NOT_FOUND_TITLE);
}
