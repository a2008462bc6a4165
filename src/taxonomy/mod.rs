pub mod languages;

pub use languages::{language_color, FALLBACK_COLOR};
