//! Validation Adapters - decode-and-validate steps at the storage boundary.
//!
//! Contains the decoder that turns untyped entity records into typed profiles.

mod entity_record_decoder;

pub use entity_record_decoder::{EntityRecordDecoder, RecordDecodeError};
