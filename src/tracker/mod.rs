mod error;
mod output;
mod tracker;

pub use tracker::{Tracker, TrackerStatus};
