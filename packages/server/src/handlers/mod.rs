pub mod interview;
pub mod pattern;
pub mod problem;
pub mod submission;
pub mod user;
