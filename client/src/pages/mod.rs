//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page sets its document title and composes `components`; the static
//! copy lives next to the page that shows it.

pub mod balloons;
pub mod not_found;
pub mod portfolio;
