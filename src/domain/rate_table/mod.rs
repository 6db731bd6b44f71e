//! Rate sheet aggregate
//!
//! Weight breakpoints with one carrier cost per zone, and the ceiling
//! lookup used to price a parcel against them.

pub mod model;

pub use model::{RateRow, RateTable};
