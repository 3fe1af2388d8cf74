//! glint Style - Style Value Model
//!
//! Inline style maps, property identifiers, and transition values used
//! by the presentation layer. No parsing, no cascade: the image engine
//! only ever produces inline styles.

pub mod inline;
pub mod properties;
pub mod transition;

pub use inline::InlineStyle;
pub use properties::{PropertyId, StyleValue};
pub use transition::{TimingFunction, Transition};
