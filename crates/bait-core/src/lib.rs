//! Aggregation core of the bait trial report.
//!
//! Every stage takes an immutable [`RecordSet`](bait_model::RecordSet) and
//! returns a new value:
//!
//! - [`filter_valid`] drops records without a subject identifier
//! - [`count_summary`] counts interactions by bait type and station group
//! - [`interaction_proportions`] normalizes each subject's interactions to percent
//! - [`build_report`] runs the whole pipeline

mod error;
mod filter;
mod proportions;
mod report;
mod summary;

pub use error::{AggregateError, Result};
pub use filter::filter_valid;
pub use proportions::{
    Crosstab, EmptyRowPolicy, crosstab, interaction_proportions,
    interaction_proportions_with_policy,
};
pub use report::build_report;
pub use summary::{count_summary, trial_overview};
