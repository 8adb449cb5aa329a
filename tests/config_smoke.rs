use pixel_collision::{CollisionConfig, CollisionError};

#[test]
fn config_json_smoke() {
    let config = CollisionConfig::from_json("{}").expect("empty object uses defaults");
    assert_eq!(config, CollisionConfig::default());

    let config = CollisionConfig::from_json(r#"{"slopeMaxHeight":0}"#).unwrap();
    assert_eq!(config.slope_max_height, 0);

    let json = config.to_json();
    assert!(json.contains("slopeMaxHeight"));

    let err = CollisionConfig::from_json(r#"{"slopeMaxHeight":-3}"#).unwrap_err();
    assert!(matches!(err, CollisionError::InvalidConfig(_)));
    assert!(err.to_string().contains("slope"));
}
