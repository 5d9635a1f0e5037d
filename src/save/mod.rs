pub mod records;
pub use records::*;

pub mod results;
pub use results::*;
