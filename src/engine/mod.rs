pub mod config;
pub mod rate;

pub use config::Config;
pub use rate::{count_words, RateSynchronizer};
