// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_from_args, run_with_output};
pub use crate::core::aggregator::{aggregate, count_file};
pub use crate::core::ranker::{alphabetical, rank, top_n};
pub use crate::core::tokenizer::words;
pub use models::{FrequencyMode, RankedEntry, TextStats};
pub use utils::{USAGE, render_report};
