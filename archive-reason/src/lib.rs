//! Decides why an archived issue is suppressed.
//!
//! An archived issue carries a [`Substatus`] and a bag of optional
//! suppression parameters ([`StatusDetails`]). [`resolve`] maps the pair to
//! exactly one [`Reason`] using a fixed precedence order. The reason carries
//! the concrete values a renderer needs but never the rendered text itself.
//!
//! Resolution is total: malformed input still yields a well-typed reason.
//! Callers that want to reject malformed details run [`validate`] first, or
//! use [`resolve_checked`] which does both.

pub mod model;
pub mod reason;
pub mod validate;

pub use model::{StatusDetails, Substatus};
pub use reason::{resolve, Reason};
pub use validate::{resolve_checked, validate, InvalidStatusDetails};
