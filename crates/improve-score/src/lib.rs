//! improve-score
//!
//! IMPROVE venous thromboembolism risk score. Pure data and arithmetic, no
//! I/O. Holds the finding catalog, the risk table, and the engine that keeps
//! a patient's findings and derives score, 3-month risk, and prophylaxis
//! recommendation from them.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod risk;
pub mod scoring;

pub use catalog::catalog;
pub use engine::{
    ScoreEngine, assess, compute_score, initial_state, parse_finding,
    to_structured_input, toggle,
};
pub use error::ScoreError;
pub use risk::{recommendation_for, risk_for};
pub use scoring::{Assessment, Finding, FindingId, FindingState, Recommendation};
