use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::LevelDefinition;

/// On-disk catalog format: `{"levels": [{"layout": "..."}]}`, each layout a
/// newline-separated grid in the level grammar.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub levels: Vec<CatalogEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub layout: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read level catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level catalog: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_catalog(path: &Path) -> Result<Vec<LevelDefinition>, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    Ok(file
        .levels
        .iter()
        .map(|entry| LevelDefinition::from_layout(&entry.layout))
        .collect())
}

/// The shipped catalog, in play order. The third level starts with a box
/// already on a goal (`*`) so the pre-solved marker gets exercised in play.
pub fn built_in_levels() -> Vec<LevelDefinition> {
    BUILT_IN_LAYOUTS
        .iter()
        .map(|layout| LevelDefinition::from_layout(layout))
        .collect()
}

const BUILT_IN_LAYOUTS: &[&str] = &[
    r#"
#######
#.@.$~#
#######
"#,
    r#"
########
#..~...#
#..$$..#
#.@..~.#
########
"#,
    r#"
########
#......#
#.~$...#
#..@*..#
#......#
########
"#,
];
