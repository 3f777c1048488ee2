//! Core types shared across the sprig workspace.
//!
//! This crate holds the vocabulary every other sprig crate speaks:
//! declaration modifiers, identifier rules and render configuration.

mod config;
mod indent;
mod modifier;
mod naming;

pub use config::RenderConfig;
pub use indent::Indent;
pub use modifier::{Modifier, ModifierSet, ParseModifierError};
pub use naming::{KEYWORDS, is_keyword, is_valid_identifier, is_valid_name};
