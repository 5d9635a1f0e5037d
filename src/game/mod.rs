pub mod outcome;
pub use outcome::*;

pub mod score;
pub use score::*;
