use crate::personas::{PersonaCatalog, PersonaProfile};

/// Prompt for `turn_index`, wrapping once the persona's list is exhausted.
///
/// Unknown persona ids use the catalog's default persona.
pub fn next_prompt<'a>(catalog: &'a PersonaCatalog, persona_id: &str, turn_index: usize) -> &'a str {
    prompt_at(catalog.resolve(persona_id), turn_index)
}

/// Catalog personas always carry prompts; the empty case only arises for
/// profiles built by hand and yields an empty prompt.
pub fn prompt_at(persona: &PersonaProfile, turn_index: usize) -> &str {
    let prompts = &persona.prompts;
    if prompts.is_empty() {
        return "";
    }
    &prompts[turn_index % prompts.len()]
}

/// Opening message: greeting plus the first prompt.
pub fn opening_prompt(persona: &PersonaProfile, startup: &str) -> String {
    format!(
        "Hello! I'm your {} for today's pitch session. I'm excited to learn about {}. {}",
        persona.name,
        startup,
        prompt_at(persona, 0)
    )
}

/// Text the prompter sends for `turn_index`.
pub fn prompt_for_turn(persona: &PersonaProfile, startup: &str, turn_index: usize) -> String {
    if turn_index == 0 {
        opening_prompt(persona, startup)
    } else {
        prompt_at(persona, turn_index).to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sequencer.rs"]
mod tests;
