mod next_pass;
mod types;

pub use next_pass::summarize;
pub use types::{VisiblePass, VisualPassesResponse};
