pub mod address_normalizer;

pub use address_normalizer::{is_address_in_group, normalize, to_checksum_address};
