//! Physical object record view (mock-server shape).

use serde::Deserialize;

/// Object kinds a mock physical-object response may be keyed under.
pub const OBJECT_KINDS: [&str; 2] = ["biological_specimen", "cultural_heritage_object"];

/// Descriptive fields of a physical object (a specimen or artifact catalog
/// entry). All four fields are required; a record missing any of them fails
/// deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhysicalObjectRecord {
    /// Collection catalog number
    pub catalog_number: String,

    /// Code of the holding collection
    pub collection_code: String,

    /// Person or institution that created the record
    pub creator: String,

    /// Last modification timestamp, passed through as an opaque string
    pub date_modified: String,
}
