pub mod driver;
pub mod solve;
pub mod types;

pub use driver::*;
pub use types::*;
