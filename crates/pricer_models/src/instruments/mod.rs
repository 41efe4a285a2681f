//! European vanilla option contracts.
//!
//! This module provides:
//! - [`OptionType`]: call/put kind with intrinsic payoff
//! - [`OptionContract`]: spot, strike, expiry and kind as one immutable value
//! - [`InstrumentError`]: validation failures at construction time
//!
//! Exercise is European only: there is no early-exercise representation.

pub mod error;
pub mod payoff;
pub mod vanilla;

// Re-export main types at module level
pub use error::InstrumentError;
pub use payoff::OptionType;
pub use vanilla::OptionContract;
