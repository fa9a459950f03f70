pub mod analysis;
pub mod weights;
