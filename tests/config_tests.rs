use faqbot_rust::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn full_config_parses() {
    let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: debug
dataset:
  path: data/questions.csv
responses:
  - category: diabetes
    text: "Diabetes is a chronic condition."
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.dataset.path, "data/questions.csv");
    assert_eq!(config.responses.len(), 1);
    assert_eq!(config.responses[0].category, "diabetes");
}

#[test]
fn server_fields_have_defaults() {
    let yaml = r#"
server: {}
dataset:
  path: data/questions.csv
responses: []
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "info");
}

#[test]
fn missing_dataset_section_is_an_error() {
    let yaml = r#"
server: {}
responses: []
"#;

    assert!(serde_yaml::from_str::<Config>(yaml).is_err());
}

#[test]
fn shipped_config_parses_and_matches_the_dataset() {
    let raw = std::fs::read_to_string("config.yaml").unwrap();
    let config: Config = serde_yaml::from_str(&raw).unwrap();

    assert!(!config.responses.is_empty());
    assert_eq!(config.dataset.path, "data/questions.csv");

    // Every configured response category must exist in the training data,
    // otherwise the classifier can never produce it
    let examples = faqbot_rust::dataset::load(&config.dataset.path).unwrap();
    let trained: std::collections::HashSet<_> =
        examples.iter().map(|e| e.category.as_str()).collect();
    for entry in &config.responses {
        assert!(
            trained.contains(entry.category.as_str()),
            "response category '{}' has no training examples",
            entry.category
        );
    }
}
