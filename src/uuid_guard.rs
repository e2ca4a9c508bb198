//! Syntactic identifier checks, applied before any store lookup so a
//! malformed id never turns into a misleading "not found".

use uuid::Uuid;

/// Whether `value` parses as a UUID of any version.
pub fn is_uuid(value: &str) -> bool {
    Uuid::try_parse(value).is_ok()
}

/// Whether `value` parses as a UUID with version nibble 4.
///
/// Room lookups require this stricter check; the question listing path
/// intentionally only requires [`is_uuid`].
pub fn is_uuid_v4(value: &str) -> bool {
    Uuid::try_parse(value).is_ok_and(|uuid| uuid.get_version_num() == 4)
}
