//! Theme derivation and projection.
//!
//! Turns the resolved theme section into presentation variables: CSS custom
//! properties, the document mode class, the body font and at most one
//! font-service stylesheet per distinct family.

mod fonts;
mod projector;

pub use fonts::{FONT_SERVICE_BASE, FontRegistry};
pub use projector::{PresentationTarget, StyleRoot, project};
