//! Stateless formulas over dimensioned quantities.
//!
//! Every function takes its inputs by value and returns a new quantity, so
//! the signatures double as a dimensional check of each formula.

pub mod mechanics;
pub mod gravity;
