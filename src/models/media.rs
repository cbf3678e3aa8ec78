//! Media record view over a JSON:API document.

use serde::{Deserialize, Deserializer};

/// Custom deserializer accepting a record id as either a JSON string or a
/// bare number; the live service has served both over time.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(u64),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(id) => Ok(id),
        IdRepr::Number(id) => Ok(id.to_string()),
    }
}

/// A media record (a digital asset entry such as a 3D scan).
///
/// Only the fields the harness asserts on are modeled; everything else in the
/// record is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaRecord {
    /// Stable record identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Relationship block, when the record links to other resources
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

/// Relationship block of a media record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Relationships {
    /// Link to the physical object this media was derived from
    pub physical_object: Option<RelationshipPointer>,
}

/// A JSON:API relationship pointer (`{"data": {"id": ...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipPointer {
    /// The related resource stub
    pub data: RelatedResource,
}

/// Identifier stub of a related resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedResource {
    /// Identifier of the related record
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

impl MediaRecord {
    /// The linked physical-object id, if the relationship block names one.
    pub fn physical_object_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()?
            .physical_object
            .as_ref()
            .map(|pointer| pointer.data.id.as_str())
    }
}
