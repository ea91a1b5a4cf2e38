//! Polls brokerage quotes for a fixed watchlist and renders them as a
//! colorized table on stdout.

pub mod api;
pub mod app;
pub mod models;

mod test;
