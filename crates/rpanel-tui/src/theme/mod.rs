//! CRT theme: palette constants and style helpers

pub mod palette;
pub mod styles;
