//! Output of a run.
//!
//! - [`notice`] — renders license groups into the `THIRDPARTY_NOTICE.txt` document.
//! - [`terminal`] — colored or JSON summary printed on stdout after the file is written.

pub mod notice;
pub mod terminal;
