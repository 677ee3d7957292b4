//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive chapter records as props and
//! never fetch or hold page state.

pub mod chapter_card;
pub mod chapter_list;
