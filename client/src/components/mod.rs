//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog records as tiles and read the glyph renderer
//! from Leptos context. They own no state.

pub mod design_card;
pub mod logo;
pub mod service_card;
