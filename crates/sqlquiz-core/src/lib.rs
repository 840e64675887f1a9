pub mod admission;
pub mod attempts;
pub mod compare;
pub mod config;
pub mod errors;
pub mod execute;
pub mod fixture;
pub mod model;
pub mod questions;
pub mod quiz;
pub mod reference;
pub mod report;

pub use admission::{AdmissionFilter, KeywordDenylist};
pub use compare::{Outcome, Verdict};
pub use config::QuizConfig;
pub use errors::{ConfigError, QuizError};
pub use fixture::FixtureStore;
pub use quiz::{Quiz, Submission};
