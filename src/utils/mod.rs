// Form body decoding
pub mod url_encoding;

// Display utilities
pub mod json_converter;

pub use url_encoding::parse_urlencoded_entries;
pub use json_converter::node_to_short_string;
