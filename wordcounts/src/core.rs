// src/core.rs
pub mod aggregator;
pub mod ranker;
pub mod tokenizer;
