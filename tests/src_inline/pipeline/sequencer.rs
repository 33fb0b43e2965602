use super::*;

#[test]
fn test_next_prompt_selects_in_order() {
    let catalog = PersonaCatalog::builtin();
    assert_eq!(
        next_prompt(&catalog, "vc", 0),
        "Let's start with the fundamentals. What problem are you solving, and how big is the market opportunity?"
    );
    assert_eq!(
        next_prompt(&catalog, "angel", 5),
        "How do you plan to acquire your first 100 customers?"
    );
    assert_eq!(
        next_prompt(&catalog, "industry", 7),
        "How do you plan to capture market share from incumbents?"
    );
}

#[test]
fn test_next_prompt_wraps_modulo_list_length() {
    let catalog = PersonaCatalog::builtin();
    for persona in catalog.personas() {
        let len = persona.prompts.len();
        for i in 0..3 * len {
            assert_eq!(
                next_prompt(&catalog, &persona.id, i),
                next_prompt(&catalog, &persona.id, i + len)
            );
        }
    }
}

#[test]
fn test_unknown_persona_uses_default_list() {
    let catalog = PersonaCatalog::builtin();
    for i in 0..16 {
        assert_eq!(next_prompt(&catalog, "unknown", i), next_prompt(&catalog, "vc", i));
    }
}

#[test]
fn test_opening_prompt_greets_with_startup() {
    let catalog = PersonaCatalog::builtin();
    let tech = catalog.resolve("tech");
    let text = opening_prompt(tech, "TechFlow");
    assert_eq!(
        text,
        "Hello! I'm your Tech Investor for today's pitch session. I'm excited to learn about TechFlow. Tell me about your technology stack. What makes your solution technically superior?"
    );
    assert_eq!(prompt_for_turn(tech, "TechFlow", 0), text);
    assert_eq!(prompt_for_turn(tech, "TechFlow", 8), tech.prompts[0]);
}

#[test]
fn test_prompt_at_hand_built_profile_without_prompts() {
    let persona = PersonaProfile {
        id: "empty".to_string(),
        name: "Empty".to_string(),
        personality: String::new(),
        focus: Vec::new(),
        prompts: Vec::new(),
    };
    assert_eq!(prompt_at(&persona, 3), "");
}
