mod category;
mod dashboard;

pub use category::*;
pub use dashboard::*;
