pub mod analysis;
pub mod config;

pub use analysis::{AnalysisResult, AnalysisStatus, ToneScore};
pub use config::Config;
