pub mod derangement;
pub mod draw;
pub mod rng;

pub use crate::domain::model::{Assignment, OutputFormat, Pairing};
pub use crate::domain::ports::DrawSettings;
pub use crate::utils::error::Result;
