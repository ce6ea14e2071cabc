//! Theme for Al-Majlis: global stylesheet and per-vibe accent rules.

pub mod colors;
mod styles;

use std::fmt::Write;

pub use styles::GLOBAL_STYLES;

use colors::{ACCENTS, INK, INK_SOFT, SAND, SAND_DEEP};

/// CSS custom properties and one rule set per accent class.
///
/// Accent classes are applied to the hero card, vibe buttons and the share
/// button, so a selection recolors all of them at once.
pub fn accent_styles() -> String {
    let mut css = format!(
        ":root {{ --sand: {SAND}; --sand-deep: {SAND_DEEP}; --ink: {INK}; --ink-soft: {INK_SOFT}; }}\n"
    );
    for accent in &ACCENTS {
        let _ = writeln!(
            css,
            ".{class} {{ --accent-from: {from}; --accent-to: {to}; --accent-glow: {glow}; }}",
            class = accent.class,
            from = accent.from,
            to = accent.to,
            glow = accent.glow,
        );
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use majlis_core::vibes;

    #[test]
    fn every_vibe_accent_has_a_rule() {
        let css = accent_styles();
        for vibe in vibes() {
            assert!(
                css.contains(&format!(".{} {{", vibe.accent)),
                "missing rule for {}",
                vibe.accent
            );
        }
    }

    #[test]
    fn root_variables_present() {
        assert!(accent_styles().starts_with(":root {"));
    }
}
