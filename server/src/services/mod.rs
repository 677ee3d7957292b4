//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream I/O so route handlers can stay focused on
//! protocol translation.

pub mod quran;
