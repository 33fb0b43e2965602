use super::loader::parse_catalog;
use super::*;

fn persona(id: &str, prompts: &[&str]) -> PersonaProfile {
    PersonaProfile {
        id: id.to_string(),
        name: format!("{id} judge"),
        personality: String::new(),
        focus: Vec::new(),
        prompts: prompts.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_builtin_catalog_shape() {
    let catalog = PersonaCatalog::builtin();
    let ids: Vec<&str> = catalog.personas().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["vc", "angel", "tech", "industry"]);
    for p in catalog.personas() {
        assert_eq!(p.prompts.len(), 8, "persona {}", p.id);
        assert_eq!(p.focus.len(), 3);
    }
    assert_eq!(catalog.default_persona().id, "vc");
    assert_eq!(catalog.default_persona().name, "Venture Capitalist");
}

#[test]
fn test_resolve_unknown_falls_back_to_default() {
    let catalog = PersonaCatalog::builtin();
    assert_eq!(catalog.resolve("angel").id, "angel");
    assert_eq!(catalog.resolve("shark").id, "vc");
    assert!(catalog.get("shark").is_none());
}

#[test]
fn test_new_rejects_bad_catalogs() {
    assert!(matches!(
        PersonaCatalog::new(Vec::new(), "vc"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        PersonaCatalog::new(vec![persona("vc", &[])], "vc"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        PersonaCatalog::new(vec![persona("vc", &["a"]), persona("vc", &["b"])], "vc"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        PersonaCatalog::new(vec![persona("vc", &["a"])], "angel"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        PersonaCatalog::new(vec![persona(" ", &["a"])], " "),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_parse_catalog_with_explicit_default() {
    let json = r#"{
        "default": "coach",
        "personas": [
            {"id": "mentor", "name": "Mentor", "prompts": ["Why now?"]},
            {"id": "coach", "name": "Coach", "personality": "Calm", "focus": ["Delivery"], "prompts": ["Who are you?", "What next?"]}
        ]
    }"#;
    let catalog = parse_catalog(json).unwrap();
    assert_eq!(catalog.personas().len(), 2);
    assert_eq!(catalog.default_persona().id, "coach");
    assert_eq!(catalog.resolve("nobody").prompts.len(), 2);
    assert_eq!(catalog.get("mentor").unwrap().personality, "");
}

#[test]
fn test_parse_catalog_default_is_first_when_omitted() {
    let json = r#"{"personas": [{"id": "a", "name": "A", "prompts": ["p"]}, {"id": "b", "name": "B", "prompts": ["q"]}]}"#;
    let catalog = parse_catalog(json).unwrap();
    assert_eq!(catalog.default_persona().id, "a");
}

#[test]
fn test_parse_catalog_rejects_malformed_json() {
    assert!(matches!(parse_catalog("{"), Err(InputError::Parse(_))));
    assert!(matches!(
        parse_catalog(r#"{"personas": []}"#),
        Err(InputError::InvalidInput(_))
    ));
}
