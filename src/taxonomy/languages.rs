use std::collections::HashMap;
use std::sync::OnceLock;

/// Color for languages missing from the table.
pub const FALLBACK_COLOR: &str = "#ccc";

fn color_map() -> &'static HashMap<&'static str, &'static str> {
    static COLORS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    COLORS.get_or_init(|| {
        [
            ("JavaScript", "#f1e05a"),
            ("TypeScript", "#3178c6"),
            ("Python", "#3572A5"),
            ("Java", "#b07219"),
            ("Go", "#00ADD8"),
            ("Rust", "#dea584"),
            ("PHP", "#00ADD8"),
            ("CSS", "#563d7c"),
            ("HTML", "#e34c26"),
            ("Swift", "#ffac45"),
            ("C++", "#f34b7d"),
            ("C", "#555555"),
            ("C#", "#178600"),
            ("Ruby", "#701516"),
            ("Kotlin", "#F18E33"),
            ("Dart", "#F04C33"),
            ("Lua", "#005fa0"),
            ("Solidity", "#aa6746"),
        ]
        .iter()
        .cloned()
        .collect()
    })
}

/// Display color for a language name as reported by GitHub. Lookup is
/// exact, so "rust" falls back to gray.
pub fn language_color(language: &str) -> &'static str {
    color_map().get(language).copied().unwrap_or(FALLBACK_COLOR)
}
