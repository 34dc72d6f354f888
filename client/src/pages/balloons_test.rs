use super::*;

#[test]
fn exactly_one_nav_link_is_active() {
    let active: Vec<&str> = NAV_LINKS.iter().filter(|l| l.active).map(|l| l.label).collect();
    assert_eq!(active, ["Balloon Services"]);
}

#[test]
fn active_nav_link_gets_modifier_class() {
    assert!(nav_link_class(NAV_LINKS[2]).ends_with("--active"));
    assert!(!nav_link_class(NAV_LINKS[0]).contains("--active"));
}

#[test]
fn back_link_targets_portfolio_root() {
    assert_eq!(BACK_TARGET, AppRoute::Portfolio);
    assert_eq!(BACK_TARGET.path(), "/");
    assert_eq!(AppRoute::resolve(BACK_TARGET.path()), Some(AppRoute::Portfolio));
}

#[test]
fn hero_style_embeds_image_url() {
    let style = hero_background_style();
    assert!(style.starts_with("background-image: url('https://"));
    assert!(style.ends_with("')"));
    assert!(style.contains(HERO_IMAGE_URL));
}

#[test]
fn overlay_fades_from_top_to_dark_bottom() {
    assert!(HERO_OVERLAY_STYLE.contains("to bottom"));
    assert!(HERO_OVERLAY_STYLE.contains("rgba(0,0,0,0.7) 100%"));
}

#[test]
fn footer_copy_is_fixed() {
    assert_eq!(SOCIAL_GLYPHS, ["camera", "alternate_email", "location_on"]);
    assert_eq!(LEGAL_LINKS, ["Privacy Policy", "Terms of Service", "Contact Us"]);
    assert!(COPYRIGHT.contains("Ellie and Piper"));
}

#[test]
fn nav_logo_uses_gold_champagne_asset() {
    assert_eq!(NAV_LOGO.src(), "/images/logo/ellie-piper-nav-gold-champagne.png");
}
