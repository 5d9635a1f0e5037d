pub mod color;
pub use color::*;

pub mod deck;
pub use deck::*;

pub mod pair;
pub use pair::*;

pub mod sequence;
pub use sequence::*;

pub mod shuffle;
pub use shuffle::*;
