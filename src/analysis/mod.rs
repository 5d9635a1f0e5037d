pub mod heatmap;
pub use heatmap::*;
