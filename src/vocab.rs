//! JSON-LD context and node-shape helpers
//!
//! All catalogue nodes use compact IRIs (`dct:title`, `sedi:Offering`, ...)
//! resolved through the prefixes returned by [`default_context`].

use serde_json::{json, Map, Value};

/// Prefix → namespace IRI, in output order
pub const PREFIXES: &[(&str, &str)] = &[
    ("sedi", "https://w3id.org/sedimark/ontology#"),
    ("dct", "http://purl.org/dc/terms/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("vocab", "https://w3id.org/sedimark/vocab#"),
    ("schema", "https://schema.org/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
];

// Node types
pub const NAMED_INDIVIDUAL: &str = "owl:NamedIndividual";
pub const PARTICIPANT: &str = "sedi:Participant";
pub const DATA_ASSET: &str = "vocab:DataAsset";
pub const OFFERING: &str = "sedi:Offering";

/// Build the `@context` object
pub fn default_context() -> Map<String, Value> {
    PREFIXES
        .iter()
        .map(|(prefix, iri)| (prefix.to_string(), Value::String(iri.to_string())))
        .collect()
}

/// `{"@id": iri}`
pub fn id_ref(iri: &str) -> Value {
    json!({ "@id": iri })
}

/// `{"@value": value, "@type": "rdfs:Literal"}`
pub fn literal(value: impl Into<Value>) -> Value {
    let value = value.into();
    json!({ "@value": value, "@type": "rdfs:Literal" })
}

/// `{"@value": value, "@language": "en"}`
pub fn lang_en(value: impl Into<Value>) -> Value {
    let value = value.into();
    json!({ "@value": value, "@language": "en" })
}

/// `{"@value": date, "@type": "xsd:date"}`
pub fn xsd_date(date: &str) -> Value {
    json!({ "@value": date, "@type": "xsd:date" })
}

/// `@type` array for a named individual of `class`
pub fn typed(class: &str) -> Value {
    json!([NAMED_INDIVIDUAL, class])
}

/// True when the node's `@type` (string or array) contains `class`
pub fn has_type(node: &Value, class: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == class,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(class)),
        _ => false,
    }
}

/// The `@id` of a node or reference object
pub fn node_id(node: &Value) -> Option<&str> {
    node.get("@id").and_then(Value::as_str)
}

/// The string value of a property that is either a plain string or a
/// `{"@value": ..}` object
pub fn plain_value<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    match node.get(key)? {
        Value::String(s) => Some(s),
        Value::Object(obj) => obj.get("@value").and_then(Value::as_str),
        _ => None,
    }
}
