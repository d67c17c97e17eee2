//! Institute implementations.
//!
//! Both institutes run the same SINO search software, so the response
//! parsing lives in [`sino`] and each provider module contributes only
//! its host, its document path layout, and its court coverage.

pub mod austlii;
pub mod nzlii;
pub(crate) mod sino;

pub use austlii::AustliiProvider;
pub use nzlii::NzliiProvider;
