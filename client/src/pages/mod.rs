//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch lifecycle and delegates rendering details to
//! `components`.

pub mod chapters;
pub mod raw_dump;
