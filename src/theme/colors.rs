//! Color constants for the majlis palette.
//!
//! Warm sand backgrounds with one accent gradient per vibe.

// === SAND (Backgrounds) ===
pub const SAND: &str = "#fbf6ef";
pub const SAND_DEEP: &str = "#f1e6d6";
pub const INK: &str = "#2b2118";
pub const INK_SOFT: &str = "rgba(43, 33, 24, 0.7)";

/// Gradient stops and glow for one vibe accent
pub struct Accent {
    pub class: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub glow: &'static str,
}

// === ACCENTS (one per vibe) ===
pub const ACCENTS: [Accent; 3] = [
    Accent {
        class: "accent-classic",
        from: "#1f3a5f",
        to: "#3f6e9a",
        glow: "rgba(63, 110, 154, 0.35)",
    },
    Accent {
        class: "accent-warm",
        from: "#b4532a",
        to: "#e3a05b",
        glow: "rgba(227, 160, 91, 0.35)",
    },
    Accent {
        class: "accent-modern",
        from: "#3a1c71",
        to: "#00b3a4",
        glow: "rgba(0, 179, 164, 0.35)",
    },
];
