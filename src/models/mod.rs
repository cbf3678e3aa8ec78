//! Response-shape models for the MorphoSource API.
//!
//! The client hands back raw JSON; these types give callers a shape-aware
//! view of the two envelope variants the backends produce, plus typed views
//! of the records the harness asserts on.

pub mod envelope;
pub mod media;
pub mod physical_object;

pub use envelope::{Envelope, JsonApiDocument, MockDocument, PageInfo};
pub use media::{MediaRecord, RelatedResource, RelationshipPointer, Relationships};
pub use physical_object::{PhysicalObjectRecord, OBJECT_KINDS};
