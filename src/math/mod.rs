pub mod checker;
pub mod hex;
pub mod hsl;
pub mod wcag;
