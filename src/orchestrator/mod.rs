//! Search orchestration: normalization, boosting, merging, pipeline.

pub mod boost;
pub mod merge;
pub mod normalize;
pub mod search;
