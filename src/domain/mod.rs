pub mod topic;

pub use topic::{Mode, Topic};
