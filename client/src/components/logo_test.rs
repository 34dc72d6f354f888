use std::collections::HashSet;

use super::*;

#[test]
fn default_variant_is_transparent() {
    assert_eq!(LogoVariant::default(), LogoVariant::Transparent);
}

#[test]
fn src_points_into_logo_dir() {
    assert_eq!(
        LogoVariant::NavGoldChampagne.src(),
        "/images/logo/ellie-piper-nav-gold-champagne.png"
    );
    assert_eq!(LogoVariant::Monogram.src(), "/images/logo/ellie-piper-monogram.png");
}

#[test]
fn slugs_are_unique() {
    let slugs: HashSet<&str> = LogoVariant::ALL.iter().map(|v| v.slug()).collect();
    assert_eq!(slugs.len(), LogoVariant::ALL.len());
}

#[test]
fn slugs_are_kebab_case() {
    for variant in LogoVariant::ALL {
        let slug = variant.slug();
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{slug}");
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
    }
}

#[test]
fn every_nav_variant_has_a_circle_counterpart() {
    for variant in LogoVariant::ALL {
        if let Some(rest) = variant.slug().strip_prefix("nav") {
            let circle = format!("circle{rest}");
            assert!(
                LogoVariant::ALL.iter().any(|v| v.slug() == circle),
                "missing {circle}"
            );
        }
    }
}
