pub mod defs;
pub mod loader;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::input::InputError;
use crate::personas::defs::{DEFAULT_PERSONA_ID, PersonaDef, builtin_personas};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub focus: Vec<String>,
    pub prompts: Vec<String>,
}

impl From<&PersonaDef> for PersonaProfile {
    fn from(def: &PersonaDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            personality: def.personality.to_string(),
            focus: def.focus.iter().map(|s| s.to_string()).collect(),
            prompts: def.prompts.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered set of personas with one designated fallback.
///
/// Every persona in a catalog has at least one prompt, so modulo selection
/// over its prompt list never divides by zero.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<PersonaProfile>,
    default_index: usize,
}

impl PersonaCatalog {
    pub fn new(personas: Vec<PersonaProfile>, default_id: &str) -> Result<Self, InputError> {
        if personas.is_empty() {
            return Err(InputError::InvalidInput(
                "persona catalog is empty".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for persona in &personas {
            if persona.id.trim().is_empty() {
                return Err(InputError::InvalidInput(
                    "persona with empty id".to_string(),
                ));
            }
            if !seen.insert(persona.id.as_str()) {
                return Err(InputError::InvalidInput(format!(
                    "duplicate persona id: {}",
                    persona.id
                )));
            }
            if persona.prompts.is_empty() {
                return Err(InputError::InvalidInput(format!(
                    "persona {} has no prompts",
                    persona.id
                )));
            }
        }
        let default_index = personas
            .iter()
            .position(|p| p.id == default_id)
            .ok_or_else(|| {
                InputError::InvalidInput(format!("default persona {default_id} is not defined"))
            })?;
        Ok(Self {
            personas,
            default_index,
        })
    }

    pub fn builtin() -> Self {
        let personas: Vec<PersonaProfile> =
            builtin_personas().iter().map(PersonaProfile::from).collect();
        let default_index = personas
            .iter()
            .position(|p| p.id == DEFAULT_PERSONA_ID)
            .unwrap_or(0);
        Self {
            personas,
            default_index,
        }
    }

    pub fn personas(&self) -> &[PersonaProfile] {
        &self.personas
    }

    pub fn get(&self, id: &str) -> Option<&PersonaProfile> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn default_persona(&self) -> &PersonaProfile {
        &self.personas[self.default_index]
    }

    /// Looks up `id`, falling back to the default persona when unknown.
    pub fn resolve(&self, id: &str) -> &PersonaProfile {
        match self.get(id) {
            Some(persona) => persona,
            None => {
                tracing::debug!(
                    persona = id,
                    fallback = %self.default_persona().id,
                    "unknown persona; using default"
                );
                self.default_persona()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/personas/tests.rs"]
mod tests;
