pub mod quote;

pub use quote::{NOT_AVAILABLE, QuoteSnapshot};
