//! Icon glyph capability.
//!
//! Pages never assume a global icon font. They ask the `Glyphs` handle from
//! context to render a glyph by name, and `App` decides which renderer backs
//! it.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

#[cfg(test)]
#[path = "glyphs_test.rs"]
mod glyphs_test;

/// Class the Material Symbols font keys its ligatures on.
pub const MATERIAL_SYMBOLS_CLASS: &str = "material-symbols-outlined";

/// Renders an icon glyph addressed by string identifier.
pub trait GlyphRenderer: Send + Sync {
    fn render(&self, glyph: &str) -> AnyView;
}

/// Ligature-based renderer for the Material Symbols icon font.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialSymbols;

impl GlyphRenderer for MaterialSymbols {
    fn render(&self, glyph: &str) -> AnyView {
        let glyph = glyph.to_owned();
        view! { <span class=MATERIAL_SYMBOLS_CLASS aria-hidden="true">{glyph}</span> }.into_any()
    }
}

/// Shared handle to the active glyph renderer, provided through context.
#[derive(Clone)]
pub struct Glyphs(Arc<dyn GlyphRenderer>);

impl Glyphs {
    pub fn new(renderer: impl GlyphRenderer + 'static) -> Self {
        Self(Arc::new(renderer))
    }

    pub fn render(&self, glyph: &str) -> AnyView {
        self.0.render(glyph)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(MaterialSymbols)
    }
}

impl fmt::Debug for Glyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyphs").finish_non_exhaustive()
    }
}

/// Glyph renderer from context, falling back to Material Symbols when no
/// provider is mounted.
pub fn use_glyphs() -> Glyphs {
    use_context::<Glyphs>().unwrap_or_default()
}
