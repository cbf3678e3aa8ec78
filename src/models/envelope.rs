//! Envelope classification for backend responses.
//!
//! The live service answers in a JSON:API-like shape (`{"data": ...}`) while
//! the mock server wraps everything under `{"response": ...}`. The client
//! itself passes documents through untouched; [`Envelope::classify`] is the
//! opt-in step that turns a raw value into a shape the harness can match on
//! exhaustively.

use crate::error::EnvelopeError;
use crate::models::media::MediaRecord;
use crate::models::physical_object::{PhysicalObjectRecord, OBJECT_KINDS};
use serde::Deserialize;
use serde_json::Value;

/// A backend response, classified by its top-level key.
#[derive(Debug, Clone)]
pub enum Envelope {
    /// Live JSON:API-like shape: `{"data": [...]}` or `{"data": {...}}`
    JsonApi(JsonApiDocument),

    /// Mock-server shape: `{"response": {...}}`
    Mock(MockDocument),
}

impl Envelope {
    /// Classify a raw response document.
    ///
    /// A document with neither a `data` nor a `response` top-level key (or a
    /// non-object document) is an error rather than a silent third variant.
    pub fn classify(value: Value) -> Result<Envelope, EnvelopeError> {
        let mut map = match value {
            Value::Object(map) => map,
            _ => return Err(EnvelopeError::UnrecognizedShape(Vec::new())),
        };

        if let Some(data) = map.remove("data") {
            return Ok(Envelope::JsonApi(JsonApiDocument { data }));
        }
        if let Some(response) = map.remove("response") {
            return Ok(Envelope::Mock(MockDocument { response }));
        }

        Err(EnvelopeError::UnrecognizedShape(
            map.keys().cloned().collect(),
        ))
    }
}

/// The `data` payload of a live JSON:API-like response.
#[derive(Debug, Clone)]
pub struct JsonApiDocument {
    data: Value,
}

impl JsonApiDocument {
    /// The raw `data` payload.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Records in the document: each element of a list payload, or the
    /// single object of a single-record payload.
    pub fn records(&self) -> Vec<&Value> {
        match &self.data {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    /// Deserialize every record as a media record.
    pub fn media_records(&self) -> Result<Vec<MediaRecord>, EnvelopeError> {
        self.records()
            .into_iter()
            .map(|record| {
                serde_json::from_value(record.clone()).map_err(EnvelopeError::MalformedRecord)
            })
            .collect()
    }

    /// The first media record, failing on an empty list.
    pub fn first_media_record(&self) -> Result<MediaRecord, EnvelopeError> {
        self.media_records()?
            .into_iter()
            .next()
            .ok_or_else(|| EnvelopeError::MissingRecord("empty data list".to_string()))
    }
}

/// Pagination block of a mock search response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Page the result window starts at
    pub current_page: u64,

    /// Requested page size
    pub limit_value: u64,
}

/// The `response` payload of a mock-server reply.
#[derive(Debug, Clone)]
pub struct MockDocument {
    response: Value,
}

impl MockDocument {
    /// The raw `response` payload.
    pub fn response(&self) -> &Value {
        &self.response
    }

    /// Pagination info of a search reply.
    pub fn pages(&self) -> Result<PageInfo, EnvelopeError> {
        let pages = self.response.get("pages").ok_or_else(|| {
            EnvelopeError::MissingRecord("no `pages` object in mock response".to_string())
        })?;
        serde_json::from_value(pages.clone()).map_err(EnvelopeError::MalformedRecord)
    }

    /// Facet block of a search reply, if present.
    pub fn facets(&self) -> Option<&Value> {
        self.response.get("facets")
    }

    /// The physical object carried by a mock lookup reply, keyed by its
    /// object kind (`biological_specimen` or `cultural_heritage_object`).
    pub fn physical_object(&self) -> Result<(&'static str, PhysicalObjectRecord), EnvelopeError> {
        for kind in OBJECT_KINDS {
            if let Some(value) = self.response.get(kind) {
                let record = serde_json::from_value(value.clone())?;
                return Ok((kind, record));
            }
        }
        Err(EnvelopeError::MissingRecord(format!(
            "no physical object under any of {:?}",
            OBJECT_KINDS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_data_key_as_json_api() {
        let envelope = Envelope::classify(json!({"data": [{"id": "1"}]})).unwrap();
        match envelope {
            Envelope::JsonApi(doc) => assert_eq!(doc.records().len(), 1),
            Envelope::Mock(_) => panic!("expected JsonApi variant"),
        }
    }

    #[test]
    fn test_classify_response_key_as_mock() {
        let envelope = Envelope::classify(json!({"response": {"pages": {}}})).unwrap();
        assert!(matches!(envelope, Envelope::Mock(_)));
    }

    #[test]
    fn test_classify_unknown_keys_rejected() {
        let result = Envelope::classify(json!({"errors": [], "meta": {}}));
        match result {
            Err(EnvelopeError::UnrecognizedShape(keys)) => {
                assert_eq!(keys, vec!["errors".to_string(), "meta".to_string()]);
            }
            other => panic!("expected UnrecognizedShape, got: {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_object_rejected() {
        assert!(Envelope::classify(json!([1, 2, 3])).is_err());
        assert!(Envelope::classify(json!("data")).is_err());
    }

    #[test]
    fn test_records_single_object_payload() {
        let envelope = Envelope::classify(json!({"data": {"id": "000429278"}})).unwrap();
        let Envelope::JsonApi(doc) = envelope else {
            panic!("expected JsonApi variant");
        };
        assert_eq!(doc.records().len(), 1);
        assert_eq!(doc.first_media_record().unwrap().id, "000429278");
    }

    #[test]
    fn test_first_media_record_empty_list() {
        let envelope = Envelope::classify(json!({"data": []})).unwrap();
        let Envelope::JsonApi(doc) = envelope else {
            panic!("expected JsonApi variant");
        };
        assert!(matches!(
            doc.first_media_record(),
            Err(EnvelopeError::MissingRecord(_))
        ));
    }

    #[test]
    fn test_mock_pages_and_facets() {
        let envelope = Envelope::classify(json!({
            "response": {
                "pages": {"current_page": 1, "limit_value": 10},
                "facets": {"modality": {}}
            }
        }))
        .unwrap();
        let Envelope::Mock(doc) = envelope else {
            panic!("expected Mock variant");
        };
        let pages = doc.pages().unwrap();
        assert_eq!(pages.current_page, 1);
        assert_eq!(pages.limit_value, 10);
        assert!(doc.facets().is_some());
    }

    #[test]
    fn test_mock_pages_missing() {
        let envelope = Envelope::classify(json!({"response": {}})).unwrap();
        let Envelope::Mock(doc) = envelope else {
            panic!("expected Mock variant");
        };
        assert!(doc.pages().is_err());
        assert!(doc.facets().is_none());
    }

    #[test]
    fn test_mock_physical_object_both_kinds() {
        let fields = json!({
            "catalog_number": "USNM 12345",
            "collection_code": "VZ",
            "creator": "Smithsonian Institution",
            "date_modified": "2024-01-15T10:00:00Z"
        });

        for kind in OBJECT_KINDS {
            let envelope =
                Envelope::classify(json!({"response": {kind: fields.clone()}})).unwrap();
            let Envelope::Mock(doc) = envelope else {
                panic!("expected Mock variant");
            };
            let (found_kind, record) = doc.physical_object().unwrap();
            assert_eq!(found_kind, kind);
            assert_eq!(record.catalog_number, "USNM 12345");
        }
    }

    #[test]
    fn test_mock_physical_object_missing() {
        let envelope = Envelope::classify(json!({"response": {"pages": {}}})).unwrap();
        let Envelope::Mock(doc) = envelope else {
            panic!("expected Mock variant");
        };
        assert!(matches!(
            doc.physical_object(),
            Err(EnvelopeError::MissingRecord(_))
        ));
    }
}
