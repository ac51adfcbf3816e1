//! Entity Module - patient and device profiles that supply baselines.

mod profile;

pub use profile::EntityProfile;
