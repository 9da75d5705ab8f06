//! Components - Reusable UI Components
//!
//! Pure presentational components; no services, no I/O.

pub mod banner;
pub mod button;
pub mod dismiss;
pub mod input;
pub mod modal;
pub mod tag;
