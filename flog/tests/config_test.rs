use flog::{Flog, FlogConfig, Memory, StackOrder};

#[test]
fn test_default_config() {
    let config = FlogConfig::default();
    assert_eq!(config.prefix, "+");
    assert_eq!(config.suffix, "->");
    assert_eq!(config.raise_suffix, "!!!");
    assert_eq!(config.tag, "flog");
    assert_eq!(config.tag_suffix, "-");
    assert!(config.color);
    assert_eq!(config.stack_order, StackOrder::OutermostFirst);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let json = r#"{ "prefix": "*", "color": false, "stack_order": "innermost_first" }"#;
    let config: FlogConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.prefix, "*");
    assert!(!config.color);
    assert_eq!(config.stack_order, StackOrder::InnermostFirst);
    assert_eq!(config.suffix, "->");
    assert_eq!(config.tag, "flog");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = FlogConfig::default().with_tag("app").with_raise_suffix("?!");
    let json = serde_json::to_string(&config).unwrap();
    let parsed: FlogConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_configured_defaults_drive_output() {
    let memory = Memory::new();
    let flog = Flog::new(
        FlogConfig::default()
            .without_color()
            .with_prefix("*")
            .with_suffix("=>"),
    )
    .with_output(memory.clone());

    flog.print("configured");
    assert_eq!(memory.stdout()[0].as_str(), "[*] - configured =>  normal \n");

    let signal = flog.throw("nope").unwrap_err();
    assert_eq!(signal.to_string(), "[*] - nope !!!  error \n");
}
