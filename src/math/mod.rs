//! Floating-point helpers for pricing.
//!
//! All floating arithmetic in the crate lives here and in the curve engine.
//! This module provides:
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`to_reference`] / [`from_reference`] | quantity ⇄ whole-token `f64` |
//! | [`RefValue`] | `f64` newtype whose checked ops reject non-finite results |

mod pegged;
mod reference_value;

pub use pegged::{from_reference, from_reference_with, to_reference};
pub use reference_value::RefValue;
