pub mod converter;

pub use converter::{Converter, JobSummary};
