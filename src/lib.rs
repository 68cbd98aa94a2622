#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub use cell::{Lazy, StableCell};
pub use classify::classify;
pub use value::{SbErr, SbResult, Value, ValueType};

pub mod cell;
pub mod classify;
pub mod print;
pub mod value;
