//! End-to-end generation over the fixture offerings listing

use std::path::{Path, PathBuf};

use sedimark_mock_catalogue::{
    list_offerings, vocab, Catalogue, CatalogueError, GenerateOptions, GeneratorConfig,
    OutputStyle,
};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/offerings.json")
}

fn options(output: PathBuf, seed: u64) -> GenerateOptions {
    GenerateOptions {
        input: fixture(),
        output,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn generate_writes_full_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("catalogue.jsonld");

    let report = options(output.clone(), 11).run().unwrap();
    assert_eq!(report.records, 3);
    assert_eq!(report.summary.nodes, 12);
    assert_eq!(report.summary.assets, 3);
    assert_eq!(report.summary.offerings, 3);
    assert_eq!(report.summary.participants, 6);

    let catalogue = Catalogue::from_file(&output).unwrap();
    assert_eq!(catalogue.context.len(), 11);

    let asset = &catalogue.graph[6];
    assert_eq!(
        asset["@id"],
        "https://sedimark.surrey.ac.uk/asset/urban-air-quality"
    );
    assert_eq!(asset["dct:created"]["@value"], "2024-01-15");

    let offering = &catalogue.graph[9];
    assert_eq!(
        offering["@id"],
        "https://sedimark.surrey.ac.uk/ecosystem/santander-traffic-flow-offering"
    );
    assert_eq!(offering["dct:created"]["@value"], "2023-09-02");

    let last = &catalogue.graph[11];
    assert_eq!(last["dct:created"]["@value"], "2022-12-31");
}

#[test]
fn providers_come_from_participant_pool() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("catalogue.jsonld");
    options(output.clone(), 5).run().unwrap();

    let catalogue = Catalogue::from_file(&output).unwrap();
    let participant_ids: Vec<&str> = catalogue.graph[2..6]
        .iter()
        .filter_map(vocab::node_id)
        .collect();

    for entry in list_offerings(&catalogue) {
        let provider = entry.provider.unwrap();
        assert!(participant_ids.contains(&provider.as_str()), "{provider}");
    }
}

#[test]
fn same_seed_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonld");
    let b = dir.path().join("b.jsonld");
    options(a.clone(), 99).run().unwrap();
    options(b.clone(), 99).run().unwrap();

    assert_eq!(
        std::fs::read_to_string(a).unwrap(),
        std::fs::read_to_string(b).unwrap()
    );
}

#[test]
fn config_image_pool_and_extra_providers_apply() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::from_yaml(
        r#"
base_url: https://catalogue.example.org/
pretty: true
images: [""]
extra_providers:
  - https://example.org/ecosystem/Acme
"#,
    )
    .unwrap();

    let mut opts = GenerateOptions::from(&config);
    opts.input = fixture();
    opts.output = dir.path().join("nested").join("catalogue.jsonld");
    opts.seed = Some(1);
    assert_eq!(opts.style, OutputStyle::Pretty);

    let report = opts.run().unwrap();
    assert_eq!(report.summary.participants, 7);

    let text = std::fs::read_to_string(&opts.output).unwrap();
    assert!(text.contains('\n'));

    let catalogue = Catalogue::from_file(&opts.output).unwrap();
    for node in &catalogue.graph[7..] {
        assert!(node.get("schema:image").is_none());
        assert!(vocab::node_id(node)
            .unwrap()
            .starts_with("https://catalogue.example.org/"));
    }
}

#[test]
fn listing_matches_generated_offerings() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("catalogue.jsonld");
    options(output.clone(), 2).run().unwrap();

    let catalogue = Catalogue::from_file(&output).unwrap();
    let entries = list_offerings(&catalogue);
    let titles: Vec<&str> = entries
        .iter()
        .filter_map(|e| e.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Urban Air Quality",
            "Santander Traffic Flow",
            "Groundwater Levels"
        ]
    );
    assert_eq!(
        entries[2].asset.as_deref(),
        Some("https://sedimark.surrey.ac.uk/asset/groundwater-levels")
    );
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path().join("out.jsonld"), 1);
    opts.input = dir.path().join("nope.json");

    let err = opts.run().unwrap_err();
    assert!(matches!(err, CatalogueError::Io { .. }));
    assert!(!dir.path().join("out.jsonld").exists());
}

#[test]
fn malformed_input_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("offerings.json");
    std::fs::write(&input, r#"{"results": [{"title": "only"}]}"#).unwrap();

    let mut opts = options(dir.path().join("out.jsonld"), 1);
    opts.input = input;
    assert!(matches!(
        opts.run().unwrap_err(),
        CatalogueError::Json { .. }
    ));
}

#[test]
fn loosely_typed_descriptions_and_keywords_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("offerings.json");
    std::fs::write(
        &input,
        r#"{"results": [
            {"title": "Null Desc", "short_description": null, "keyword": ["a"], "created_at": "2024-01-01T00:00:00Z"},
            {"title": "Numeric Keyword", "short_description": "ok", "keyword": ["x", 5], "created_at": "2024-01-02T00:00:00Z"}
        ]}"#,
    )
    .unwrap();

    let mut opts = options(dir.path().join("out.jsonld"), 1);
    opts.input = input;
    let report = opts.run().unwrap();
    assert_eq!(report.summary.offerings, 2);

    let catalogue = Catalogue::from_file(&opts.output).unwrap();
    assert!(catalogue.graph[6]["dct:description"]["@value"].is_null());
    assert!(catalogue.graph[7]["dct:description"]["@value"].is_null());
    assert_eq!(catalogue.graph[8]["dcat:keyword"][1]["@value"], 5);
    assert_eq!(catalogue.graph[8]["dcat:keyword"][1]["@language"], "en");
}
