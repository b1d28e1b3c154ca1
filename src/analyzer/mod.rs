//! Version inference over classified commits

pub mod version_analyzer;

pub use version_analyzer::VersionAnalyzer;
