pub mod assessment;
pub mod export;
pub mod output;
pub mod scoring;
