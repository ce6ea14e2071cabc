//! Page components for Al-Majlis.

mod welcome;

pub use welcome::Welcome;
