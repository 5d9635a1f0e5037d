pub mod aggregate;
pub use aggregate::*;

pub mod complete;
pub use complete::*;

pub mod matrix;
pub use matrix::*;

pub mod progress;
pub use progress::*;

pub mod report;
pub use report::*;

pub mod tally;
pub use tally::*;
