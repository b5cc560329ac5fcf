mod allowlist;
mod error;
mod forward;

pub use allowlist::Endpoint;
pub use error::RelayError;
pub use forward::{Relay, RelayBody};
