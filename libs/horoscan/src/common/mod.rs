mod types;
mod utils;

pub use types::{PhoneCandidate, ScanError, ScanOutcome};
pub use utils::get_current_timestamp_str;
