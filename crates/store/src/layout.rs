//! On-disk layout: storage regions and reserved slots.
//!
//! One physical string map is split into two logical regions by name prefix.
//! The metadata region holds the key slot; the data region holds user
//! entries. Store operations can only address the data region, so a
//! caller-supplied name can never collide with key material.

/// Prefix for the metadata region.
pub const META_PREFIX: &str = "meta/";

/// Prefix for the data region (user entries).
pub const DATA_PREFIX: &str = "data/";

/// Reserved metadata slot holding the base64-encoded symmetric key.
pub const KEY_SLOT: &str = "meta/master-key";

/// Reserved key-slot name of the original flat-namespace layout. Read by the
/// legacy import only.
pub const LEGACY_KEY_SLOT: &str = "PRIVATE_KEY";

/// Storage name for the user entry `name`.
pub fn data_slot(name: &str) -> String {
    format!("{DATA_PREFIX}{name}")
}
