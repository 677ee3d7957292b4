//! Client-side view state.
//!
//! DESIGN
//! ======
//! `fetch` holds the generic single-shot lifecycle; `chapters` and
//! `raw_dump` specialize it for the two pages so each page depends on one
//! small focused model.

pub mod chapters;
pub mod fetch;
pub mod raw_dump;
