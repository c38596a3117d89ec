//! Recognizing what a license entry actually contains.
//!
//! - [`classifier`] — maps full license text to a [`LicenseKind`](crate::models::LicenseKind)
//!   by signature matching and holds the embed whitelist.
//! - [`html`] — pattern helpers for HTML detection and canonical/bare URL extraction.

pub mod classifier;
pub mod html;
