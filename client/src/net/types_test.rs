use super::*;

// =============================================================
// GenerationRequest
// =============================================================

#[test]
fn generation_request_serializes_with_default_customization() {
    let req = GenerationRequest::new("A bakery site", TemplateId::Business, GenerationMode::Standard);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "prompt": "A bakery site",
            "template": "business",
            "generation_mode": "standard",
            "customization": {
                "primaryColor": "#6366f1",
                "font": "Inter",
                "style": "modern",
            },
        })
    );
}

#[test]
fn generation_request_missing_customization_uses_default() {
    let raw = r#"{"prompt":"x","template":"blog","generation_mode":"premium"}"#;
    let req: GenerationRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.template, TemplateId::Blog);
    assert_eq!(req.generation_mode, GenerationMode::Premium);
    assert_eq!(req.customization, Customization::default());
}

#[test]
fn generation_request_rejects_unknown_template() {
    let raw = r#"{"prompt":"x","template":"spaceship","generation_mode":"standard"}"#;
    assert!(serde_json::from_str::<GenerationRequest>(raw).is_err());
}

// =============================================================
// GenerationResult
// =============================================================

#[test]
fn generation_result_only_name_required() {
    let result: GenerationResult = serde_json::from_str(r#"{"name":"My Bakery"}"#).unwrap();
    assert_eq!(result.name, "My Bakery");
    assert!(result.id.is_none());
    assert!(result.url.is_none());
    assert!(result.template.is_none());
}

#[test]
fn generation_result_tolerates_unknown_echoed_ids() {
    let raw = r#"{"name":"My Bakery","template":"spaceship","generation_mode":42}"#;
    let result: GenerationResult = serde_json::from_str(raw).unwrap();
    assert_eq!(result.name, "My Bakery");
    assert!(result.template.is_none());
    assert!(result.generation_mode.is_none());
}

#[test]
fn generation_result_reads_every_template_id() {
    let result: GenerationResult = serde_json::from_str(r#"{"name":"Acme","template":"saas"}"#).unwrap();
    assert_eq!(result.template, Some(TemplateId::Saas));
    let result: GenerationResult =
        serde_json::from_str(r#"{"name":"Shelter","template":"nonprofit","generation_mode":null}"#).unwrap();
    assert_eq!(result.template, Some(TemplateId::Nonprofit));
    assert!(result.generation_mode.is_none());
}

#[test]
fn generation_result_ignores_unknown_fields() {
    let raw = r#"{"name":"Shop","url":"https://shop.example","html":"<html></html>"}"#;
    let result: GenerationResult = serde_json::from_str(raw).unwrap();
    assert_eq!(result.url.as_deref(), Some("https://shop.example"));
}

// =============================================================
// Enum ids
// =============================================================

#[test]
fn template_id_from_str_matches_as_str() {
    for t in TemplateId::ALL {
        assert_eq!(t.as_str().parse::<TemplateId>(), Ok(t));
    }
    assert_eq!("Business".parse::<TemplateId>(), Err(UnknownId("Business".to_owned())));
}

#[test]
fn generation_mode_defaults_to_standard() {
    assert_eq!(GenerationMode::default(), GenerationMode::Standard);
    assert_eq!("premium".parse::<GenerationMode>(), Ok(GenerationMode::Premium));
    assert!("deluxe".parse::<GenerationMode>().is_err());
}
