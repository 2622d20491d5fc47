mod aggregator;
mod traits;
mod types;

#[cfg(test)]
mod aggregator_tests;

pub use aggregator::*;
pub use traits::*;
pub use types::*;
