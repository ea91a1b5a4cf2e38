pub mod board;
pub mod color;
pub mod poller;
pub mod table;

pub use board::QuoteBoard;
pub use poller::{Poller, Task};
