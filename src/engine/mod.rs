//! Pricing and orchestration.
//!
//! The building blocks are usable on their own:
//!
//! - [`calculate_pool_fee`]: protocol fee on an inbound quantity.
//! - [`check_min_convert`], [`check_max_pool_ratio`],
//!   [`check_min_pool_ratio`], [`get_ratio`]: trade-size and pool-ratio
//!   guards.
//! - [`Route`] and [`calculate_out`]: the amplified curve.
//! - [`quote()`]: every check plus the price, without side effects.
//!
//! [`Converter`] chains them into an all-or-nothing conversion.

mod converter;
mod curve;
mod fee;
mod quote;
mod ratio;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use converter::Converter;
pub use curve::{calculate_out, Route};
pub use fee::calculate_pool_fee;
pub use quote::quote;
pub use ratio::{
    check_max_pool_ratio, check_min_convert, check_min_pool_ratio, get_ratio, pool_ratio,
    MAX_POOL_RATIO, MIN_POOL_RATIO,
};
