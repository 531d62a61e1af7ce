//! Display formatting for Rupee amounts

pub mod currency;
pub mod words;

pub use currency::*;
pub use words::*;
