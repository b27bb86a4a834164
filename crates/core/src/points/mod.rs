//! Points engine.
//!
//! A pure scoring function over a single [`Receipt`](crate::receipts::Receipt).
//! Seven independent rules each contribute a non-negative amount and the
//! score is their sum. The engine holds no state and never fails: fields it
//! cannot parse are read as zero values (see [`parsing`]).

pub mod parsing;
mod points_calculator;
pub mod rules;

pub use points_calculator::{calculate_points, PointsBreakdown};
