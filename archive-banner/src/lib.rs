//! Turns an [`archive_reason::Reason`] into the sentence shown on an
//! archived issue.
//!
//! Rendering is split along the collaborators a banner needs:
//!
//! - [`Formatter`] renders dates, durations and counts;
//! - [`Translator`] maps an English message id to the active language;
//! - [`interpolate`] substitutes rich [`Fragment`]s into `%s` placeholders.
//!
//! [`BannerRenderer`] ties them together with one template per reason.

pub mod format;
pub mod render;
pub mod template;

pub use format::{EnglishFormatter, Formatter};
pub use render::{BannerRenderer, DEFAULT_DOCS_URL};
pub use template::{interpolate, English, Fragment, Message, Translator};
