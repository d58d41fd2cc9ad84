//! Cell-level extraction: header names, workflow stages and embedded dates.

pub mod dates;
pub mod headers;
pub mod status;

pub use dates::{find_date_tokens, DateExtractor, ExtractedDates};
pub use headers::{build_headers, merged_header};
pub use status::{StatusTracker, DEFAULT_STAGES};
