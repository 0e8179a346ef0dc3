pub use board::*;
pub use errors::*;
pub use strategy::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod strategy;
mod visualization;
