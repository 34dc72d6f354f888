use super::*;

#[test]
fn fallback_status_ok_for_known_routes() {
    assert_eq!(fallback_status("/"), StatusCode::OK);
    assert_eq!(fallback_status("/ellie-piper/balloons"), StatusCode::OK);
    assert_eq!(fallback_status("/ellie-piper/balloons/"), StatusCode::OK);
}

#[test]
fn fallback_status_not_found_for_unknown_routes() {
    assert_eq!(fallback_status("/foo"), StatusCode::NOT_FOUND);
    assert_eq!(fallback_status("/pkg/missing.wasm"), StatusCode::NOT_FOUND);
}

#[test]
fn site_state_points_at_index_html() {
    let site = SiteState::new(Path::new("/srv/site"));
    assert_eq!(site.index_html.as_path(), Path::new("/srv/site/index.html"));
}
