//! Salary estimation: turn a listing's salary bounds into one number.

pub mod estimate;

pub use estimate::*;
