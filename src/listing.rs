//! Offline listing of offerings in a generated catalogue

use serde::Serialize;
use serde_json::Value;

use crate::catalogue::Catalogue;
use crate::vocab::{self, OFFERING};

/// One `sedi:Offering` node, flattened for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferingEntry {
    pub id: String,
    pub title: Option<String>,
    pub provider: Option<String>,
    pub asset: Option<String>,
    pub created: Option<String>,
}

impl OfferingEntry {
    fn from_node(node: &Value) -> Option<Self> {
        let id = vocab::node_id(node)?.to_string();
        let reference = |key: &str| node.get(key).and_then(vocab::node_id).map(str::to_string);
        Some(Self {
            id,
            title: vocab::plain_value(node, "dct:title").map(str::to_string),
            provider: reference("dct:publisher").or_else(|| reference("dct:creator")),
            asset: reference("sedi:hasAsset"),
            created: vocab::plain_value(node, "dct:created").map(str::to_string),
        })
    }
}

/// Every offering in graph order. Nodes without an `@id` are skipped.
pub fn list_offerings(catalogue: &Catalogue) -> Vec<OfferingEntry> {
    catalogue
        .graph
        .iter()
        .filter(|node| vocab::has_type(node, OFFERING))
        .filter_map(OfferingEntry::from_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lists_only_offerings() {
        let catalogue = Catalogue::from_value(json!({
            "@graph": [
                {"@id": "p", "@type": ["owl:NamedIndividual", "sedi:Participant"]},
                {"@id": "a", "@type": ["owl:NamedIndividual", "vocab:DataAsset"]},
                {
                    "@id": "o",
                    "@type": ["owl:NamedIndividual", "sedi:Offering"],
                    "dct:title": {"@value": "Ocean Buoys", "@type": "rdfs:Literal"},
                    "dct:creator": {"@id": "p"},
                    "dct:publisher": {"@id": "p"},
                    "sedi:hasAsset": {"@id": "a"},
                    "dct:created": {"@value": "2024-01-01", "@type": "xsd:date"}
                },
                {"@type": "sedi:Offering"}
            ]
        }))
        .unwrap();

        let entries = list_offerings(&catalogue);
        assert_eq!(
            entries,
            vec![OfferingEntry {
                id: "o".to_string(),
                title: Some("Ocean Buoys".to_string()),
                provider: Some("p".to_string()),
                asset: Some("a".to_string()),
                created: Some("2024-01-01".to_string()),
            }]
        );
    }

    #[test]
    fn test_provider_falls_back_to_creator() {
        let catalogue = Catalogue::from_value(json!({
            "@graph": [{
                "@id": "o",
                "@type": "sedi:Offering",
                "dct:creator": {"@id": "c"}
            }]
        }))
        .unwrap();
        let entries = list_offerings(&catalogue);
        assert_eq!(entries[0].provider.as_deref(), Some("c"));
        assert_eq!(entries[0].title, None);
        assert_eq!(entries[0].asset, None);
    }
}
