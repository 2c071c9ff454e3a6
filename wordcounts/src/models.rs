// src/models.rs
pub mod frequency_mode;
pub mod ranked_entry;
pub mod text_stats;

pub use frequency_mode::FrequencyMode;
pub use ranked_entry::RankedEntry;
pub use text_stats::TextStats;
