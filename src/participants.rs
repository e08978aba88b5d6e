//! Static participant data
//!
//! Seed participants open every catalogue; provider participants are
//! appended after them and form the pool each offering's creator and
//! publisher are drawn from.

use serde_json::{json, Value};
use url::Url;

use crate::vocab::{self, PARTICIPANT};

const SEDIMARK_LOGO: &str =
    "https://www.egm.io/wp-content/uploads/2023/05/Sedimark-Logo-definitivo.png";

const CVSSP_DESCRIPTION: &str = "Centre for Vision, Speech and Signal Processing (CVSSP) is one of the largest UK research groups focusing on multimedia signal processing and machine learning.";

/// Participant nodes grouped by role in the catalogue
#[derive(Debug, Clone)]
pub struct ParticipantRegistry {
    seeds: Vec<Value>,
    providers: Vec<Value>,
}

impl Default for ParticipantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantRegistry {
    /// Registry with the built-in seed and provider participants
    pub fn new() -> Self {
        Self {
            seeds: seed_participants(),
            providers: provider_participants(),
        }
    }

    /// Append minimal provider nodes for additional participant IRIs.
    ///
    /// IRIs already present in the pool are skipped.
    pub fn with_extra_providers<I, S>(mut self, iris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for iri in iris {
            let iri = iri.as_ref();
            if self.provider_ids().any(|id| id == iri) {
                continue;
            }
            self.providers.push(minimal_participant(iri));
        }
        self
    }

    /// Participants that always open the graph
    pub fn seeds(&self) -> &[Value] {
        &self.seeds
    }

    /// Participants offerings can be attributed to
    pub fn providers(&self) -> &[Value] {
        &self.providers
    }

    /// `@id` of every provider, in pool order
    pub fn provider_ids(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().filter_map(vocab::node_id)
    }

    /// Seeds followed by providers
    pub fn all_nodes(&self) -> impl Iterator<Item = &Value> {
        self.seeds.iter().chain(self.providers.iter())
    }
}

/// Account id for a synthesized participant: last non-empty path segment,
/// falling back to the host and then the raw IRI
fn account_id_for(iri: &str) -> String {
    let Ok(url) = Url::parse(iri) else {
        return iri.to_string();
    };
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .or_else(|| url.host_str().map(str::to_string))
        .unwrap_or_else(|| iri.to_string())
}

fn minimal_participant(iri: &str) -> Value {
    json!({
        "@id": iri,
        "@type": vocab::typed(PARTICIPANT),
        "schema:accountId": vocab::literal(account_id_for(iri)),
    })
}

fn seed_participants() -> Vec<Value> {
    vec![
        json!({
            "@id": "https://sedimark.surrey.ac.uk/ecosystem/CVSSP",
            "dct:description": {
                "@type": "rdfs:Literal",
                "@value": CVSSP_DESCRIPTION,
            },
            "schema:givenName": vocab::lang_en("Tarek"),
            "schema:familyName": vocab::lang_en("Elsaleh"),
            "sedi:hasSelf-Listing": vocab::id_ref(
                "https://sedimark.surrey.ac.uk/ecosystem/ehealth-living-lab"
            ),
            "http://xmlns.com/foaf/0.1/homepage": vocab::id_ref(
                "https://sedimark.surrey.ac.uk/ecosystem/cvssp-homepage"
            ),
            "schema:email": vocab::literal("mailto:jane-doe@xyz.edu"),
            "schema:accountId": vocab::literal("CVSSP"),
            "schema:image": vocab::id_ref(SEDIMARK_LOGO),
            "@type": vocab::typed(PARTICIPANT),
        }),
        // Un-prefixed self-listing key is part of the fixture
        json!({
            "@id": "https://sedimark.surrey.ac.uk/ecosystem/UCD",
            "dct:description": {
                "@type": "rdfs:Literal",
                "@value": CVSSP_DESCRIPTION,
            },
            "schema:givenName": vocab::lang_en("Tarek"),
            "schema:familyName": vocab::lang_en("Elsaleh"),
            "hasSelf-Listing": vocab::id_ref(
                "https://sedimark.surrey.ac.uk/ecosystem/ehealth-living-lab"
            ),
            "http://xmlns.com/foaf/0.1/homepage": vocab::id_ref(
                "https://sedimark.surrey.ac.uk/ecosystem/cvssp-homepage"
            ),
            "schema:email": vocab::literal("mailto:jane-doe@xyz.edu"),
            "schema:accountId": vocab::literal("CVSSP"),
            "schema:image": vocab::id_ref(SEDIMARK_LOGO),
            "@type": vocab::typed(PARTICIPANT),
        }),
    ]
}

fn provider_participants() -> Vec<Value> {
    vec![
        json!({
            "@id": "https://sedimark.surrey.ac.uk/ecosystem/EarthScope",
            "@type": vocab::typed(PARTICIPANT),
            "schema:givenName": vocab::lang_en("Michael"),
            "schema:familyName": vocab::lang_en("Chen"),
            "schema:email": vocab::literal("mailto:m.chen@earthscope.org"),
            "schema:accountId": vocab::literal("EarthScope"),
            "schema:image": vocab::id_ref(SEDIMARK_LOGO),
        }),
        json!({
            "@id": "https://eviden.com",
            "@type": vocab::typed(PARTICIPANT),
            "schema:givenName": "Maxime",
            "schema:familyName": "Costalonga",
            "schema:alternateName": "Maxime Costalonga (Eviden SA)",
            "schema:email": vocab::id_ref("mailto:xamcost@xam.simplelogin.com"),
            "schema:memberOf": vocab::id_ref("https://eviden.com"),
            "schema:accountId": "xamcostEviden",
            "schema:image": vocab::id_ref(
                "https://media.monsterindia.com/logos/xOP_evidseax/jdlogo.gif"
            ),
            "foaf:homepage": vocab::id_ref("https://eviden.com/about-us/"),
        }),
        json!({
            "@id": "https://sedimark.surrey.ac.uk/ecosystem/USGS",
            "@type": vocab::typed(PARTICIPANT),
            "schema:accountId": vocab::literal("USGS"),
        }),
        json!({
            "@id": "https://sedimark.surrey.ac.uk/ecosystem/JAXA",
            "@type": vocab::typed(PARTICIPANT),
            "schema:givenName": vocab::lang_en("Yuki"),
            "schema:familyName": vocab::lang_en("Tanaka"),
            "schema:email": vocab::literal("mailto:y.tanaka@jaxa.jp"),
            "schema:accountId": vocab::literal("JAXA"),
        }),
    ]
}
