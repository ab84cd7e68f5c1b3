//! Unified error types for the conversion engine.
//!
//! All fallible operations across the crate return [`SwapError`] as their
//! error type. Every variant is terminal for the swap in progress: nothing
//! is retried inside the engine, and a rejected swap has no side effects.

use thiserror::Error;

use crate::domain::{SymbolCode, Quantity};

/// Errors produced by the pricing, guard and orchestration layers.
///
/// Messages always name the offending token and, where one exists, the
/// bound that was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// The requester is not the authorized sender of the inbound transfer.
    #[error("missing required authority of {0}")]
    Unauthorized(String),

    /// No pool is registered for the symbol.
    #[error("{0} pool does not exist")]
    PoolNotFound(SymbolCode),

    /// The pool exists but swaps against it are switched off.
    #[error("{0} pool is not enabled")]
    PoolDisabled(SymbolCode),

    /// The pool's cached balance is zero.
    #[error("{0} pool has no balance")]
    PoolHasNoBalance(SymbolCode),

    /// The pool's virtual depth is zero.
    #[error("{0} pool has no depth")]
    PoolHasNoDepth(SymbolCode),

    /// The base pool does not list the target as a connector.
    #[error("{target} connector does not exist in {base} pool")]
    ConnectorMissing {
        /// Pool the conversion starts from.
        base: SymbolCode,
        /// Requested target symbol.
        target: SymbolCode,
    },

    /// The inbound quantity is worth less than the configured minimum.
    #[error("{quantity} must exceed minimum convert amount of {minimum}")]
    BelowMinimumConvert {
        /// Inbound quantity.
        quantity: Quantity,
        /// Configured minimum trade size.
        minimum: Quantity,
    },

    /// A deposit would push the pool above 500% of its depth.
    #[error("{symbol} pool ratio must be lower than 500% (would be {ratio:.4})")]
    RatioTooHigh {
        /// Pool receiving the deposit.
        symbol: SymbolCode,
        /// Resulting balance/depth ratio.
        ratio: f64,
    },

    /// A withdrawal would drain the pool below 20% of its depth.
    #[error("{symbol} pool ratio must be above 20% (would be {ratio:.4})")]
    RatioTooLow {
        /// Pool paying out.
        symbol: SymbolCode,
        /// Resulting balance/depth ratio.
        ratio: f64,
    },

    /// The fee consumes the whole inbound quantity.
    #[error("fee {fee} exceeds quantity {quantity}")]
    FeeExceedsQuantity {
        /// Inbound quantity.
        quantity: Quantity,
        /// Computed fee.
        fee: Quantity,
    },

    /// The curve rounded the output down to nothing.
    #[error("{0} conversion output rounds to zero")]
    ZeroOutputQuantity(SymbolCode),

    /// Source and target symbols are identical.
    #[error("{0} cannot convert symbol code to self")]
    SameTokenConversion(SymbolCode),

    /// A value cannot be represented at the token's decimal precision.
    #[error("precision error: {0}")]
    PrecisionError(String),

    /// A required identifier is empty.
    #[error("[{0}] cannot be empty")]
    EmptyIdentifier(&'static str),

    /// Two quantities of different symbols were combined.
    #[error("symbol mismatch: expected {expected}, got {actual}")]
    SymbolMismatch {
        /// Symbol required by the operation.
        expected: String,
        /// Symbol that was supplied.
        actual: String,
    },

    /// A symbol code string is malformed.
    #[error("invalid symbol code: {0}")]
    InvalidSymbol(String),

    /// A quantity string is malformed.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An account name is malformed.
    #[error("invalid account name: {0}")]
    InvalidAccount(String),

    /// A pool or settings record violates its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Floating-point arithmetic produced `NaN` or an infinity.
    #[error("non-finite value in {0}")]
    NonFiniteValue(&'static str),

    /// Integer arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A configuration document could not be read or parsed.
    #[cfg(feature = "config")]
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;
