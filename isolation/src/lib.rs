pub use board::*;
pub use errors::*;
pub use search::*;
pub use state::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod search;
mod state;
mod visualization;
