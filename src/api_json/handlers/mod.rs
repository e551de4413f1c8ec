pub mod dashboard;
pub mod gauge;

pub use dashboard::*;
pub use gauge::*;
