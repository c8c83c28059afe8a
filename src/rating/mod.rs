pub mod bradley_terry;
pub mod types;
pub mod weighting;

pub use bradley_terry::calculate_ratings;
pub use types::{ConfidenceLevel, GameResult, PlayerRating};
pub use weighting::calculate_weight;
