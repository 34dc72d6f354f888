//! Ellie & Piper logo image and its asset variants.

use leptos::prelude::*;

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

pub const LOGO_DIR: &str = "/images/logo";
pub const LOGO_ALT: &str = "Ellie and Piper - Party Boutique";

/// Pre-rendered logo assets. Standard, confetti-free ("no blobs"), and
/// lightened-gold renditions, each as a wide nav mark or a circle badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogoVariant {
    #[default]
    Transparent,
    Nav,
    Circle,
    CircleWhite,
    CircleCream,
    CircleSm,
    Monogram,
    TransparentNoBlobs,
    NavNoBlobs,
    CircleNoBlobs,
    CircleWhiteNoBlobs,
    CircleCreamNoBlobs,
    CircleSmNoBlobs,
    NavGoldLight,
    NavGoldBright,
    NavGoldChampagne,
    NavGoldPale,
    CircleGoldLight,
    CircleGoldBright,
    CircleGoldChampagne,
    CircleGoldPale,
}

impl LogoVariant {
    pub const ALL: [Self; 21] = [
        Self::Transparent,
        Self::Nav,
        Self::Circle,
        Self::CircleWhite,
        Self::CircleCream,
        Self::CircleSm,
        Self::Monogram,
        Self::TransparentNoBlobs,
        Self::NavNoBlobs,
        Self::CircleNoBlobs,
        Self::CircleWhiteNoBlobs,
        Self::CircleCreamNoBlobs,
        Self::CircleSmNoBlobs,
        Self::NavGoldLight,
        Self::NavGoldBright,
        Self::NavGoldChampagne,
        Self::NavGoldPale,
        Self::CircleGoldLight,
        Self::CircleGoldBright,
        Self::CircleGoldChampagne,
        Self::CircleGoldPale,
    ];

    /// Asset file-name suffix.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Nav => "nav",
            Self::Circle => "circle",
            Self::CircleWhite => "circle-white",
            Self::CircleCream => "circle-cream",
            Self::CircleSm => "circle-sm",
            Self::Monogram => "monogram",
            Self::TransparentNoBlobs => "transparent-no-blobs",
            Self::NavNoBlobs => "nav-no-blobs",
            Self::CircleNoBlobs => "circle-no-blobs",
            Self::CircleWhiteNoBlobs => "circle-white-no-blobs",
            Self::CircleCreamNoBlobs => "circle-cream-no-blobs",
            Self::CircleSmNoBlobs => "circle-sm-no-blobs",
            Self::NavGoldLight => "nav-gold-light",
            Self::NavGoldBright => "nav-gold-bright",
            Self::NavGoldChampagne => "nav-gold-champagne",
            Self::NavGoldPale => "nav-gold-pale",
            Self::CircleGoldLight => "circle-gold-light",
            Self::CircleGoldBright => "circle-gold-bright",
            Self::CircleGoldChampagne => "circle-gold-champagne",
            Self::CircleGoldPale => "circle-gold-pale",
        }
    }

    pub fn src(self) -> String {
        format!("{LOGO_DIR}/ellie-piper-{}.png", self.slug())
    }
}

#[component]
pub fn Logo(
    #[prop(optional)] variant: LogoVariant,
    #[prop(default = "logo")] class: &'static str,
) -> impl IntoView {
    view! { <img class=class src=variant.src() alt=LOGO_ALT/> }
}
