use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, read_text};
use crate::personas::{PersonaCatalog, PersonaProfile};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    default: Option<String>,
    personas: Vec<PersonaProfile>,
}

pub fn load_catalog(path: Option<&Path>) -> Result<PersonaCatalog, InputError> {
    let Some(path) = path else {
        return Ok(PersonaCatalog::builtin());
    };
    let text = read_text(path)?;
    let catalog = parse_catalog(&text)?;
    tracing::info!(
        path = %path.display(),
        personas = catalog.personas().len(),
        default = %catalog.default_persona().id,
        "loaded persona catalog"
    );
    Ok(catalog)
}

pub fn parse_catalog(text: &str) -> Result<PersonaCatalog, InputError> {
    let file: CatalogFile = serde_json::from_str(text)?;
    let default_id = match file.default {
        Some(id) => id,
        None => file
            .personas
            .first()
            .map(|p| p.id.clone())
            .unwrap_or_default(),
    };
    PersonaCatalog::new(file.personas, &default_id)
}
