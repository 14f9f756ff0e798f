//! Final-grade mapping and band aggregation.
//!
//! This module enumerates every possible exam score, computes the exact
//! final grade each one produces for a given frequency grade and exam
//! weight, groups scores into bands by rounded final grade, and crops
//! the failing portion of the score domain below a minimum passing
//! grade.

pub mod aggregate;
pub mod crop;
pub mod report;
pub mod scores;
pub mod types;
