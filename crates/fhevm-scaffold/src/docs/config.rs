//! Configuration file for the external documentation renderer.

use serde::Serialize;

/// Fixed-structure renderer configuration written alongside the
/// generated documentation.
#[derive(Debug, Clone, Serialize)]
pub struct BookConfig {
    pub title: String,
    pub description: String,
    pub structure: BookStructure,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookStructure {
    pub readme: String,
    pub summary: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            title: "FHEVM Examples".to_string(),
            description: "Generated documentation for the FHEVM example contracts".to_string(),
            structure: BookStructure {
                readme: "README.md".to_string(),
                summary: "SUMMARY.md".to_string(),
            },
        }
    }
}

/// Render the configuration as pretty-printed JSON.
pub fn render(config: &BookConfig) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(config)?;
    rendered.push('\n');
    Ok(rendered)
}
