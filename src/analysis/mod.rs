//! Rule-based requirement quality analysis
//!
//! Deterministic substitute for the external AI analysis call. Every
//! function here is a pure function of its string input: same text in,
//! same signals, score, issues, and rewrites out.

pub mod detector;
pub mod engine;
pub mod issues;
pub mod rewriter;
pub mod scorer;

pub use engine::MockAnalysisEngine;
