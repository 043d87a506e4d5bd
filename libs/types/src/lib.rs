//! Types library for the auction book engine
//!
//! This library provides the value types shared by the aggregation engine
//! and the collaborators that consume its output (renderers, reporters).
//! Orders are immutable records; prices and quantities are fixed-point
//! decimals so aggregation never drifts.
//!
//! # Modules
//! - `numeric`: Fixed-point decimal types (Price, Quantity, TickSize)
//! - `order`: Order records (Side, LimitOrder, MarketOrder, OrderRecord)
//! - `errors`: Error taxonomy

// Public modules
pub mod numeric;
pub mod order;
pub mod errors;
