//! MCP config generation: expand `.mcp.template.json` into `.mcp.json`
//!
//! Placeholders of the form `${NAME}` are replaced from the process
//! environment merged with a `.env` file at the project root; `.env`
//! entries win. Unset and empty variables both substitute to the empty
//! string and are reported as missing, but never fail the run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ConveyorError, ConveyorResult};
use crate::fs::write_file;

pub const TEMPLATE_FILE: &str = ".mcp.template.json";
pub const OUTPUT_FILE: &str = ".mcp.json";
pub const ENV_FILE: &str = ".env";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct McpReport {
    /// Path of the written `.mcp.json`
    pub output_path: PathBuf,

    /// Placeholder names that had no value, in template order
    pub missing: Vec<String>,
}

/// Expand the template under `root` using the process environment.
pub fn generate(root: &Path) -> ConveyorResult<McpReport> {
    generate_with_vars(root, std::env::vars().collect())
}

/// Expand the template under `root` with an explicit starting
/// environment. The `.env` file still overrides it.
pub fn generate_with_vars(
    root: &Path,
    mut vars: BTreeMap<String, String>,
) -> ConveyorResult<McpReport> {
    let env_path = root.join(ENV_FILE);
    if env_path.is_file() {
        let text = fs::read_to_string(&env_path)?;
        for (key, value) in parse_env_file(&text) {
            vars.insert(key, value);
        }
    }

    let template_path = root.join(TEMPLATE_FILE);
    if !template_path.is_file() {
        return Err(ConveyorError::TemplateNotFound {
            path: template_path,
        });
    }
    let template = fs::read_to_string(&template_path)?;

    let missing: Vec<String> = required_vars(&template)
        .into_iter()
        .filter(|name| vars.get(name).map_or(true, |value| value.is_empty()))
        .collect();

    let substituted = substitute(&template, &vars);
    let config: serde_json::Value =
        serde_json::from_str(&substituted).map_err(|e| ConveyorError::InvalidTemplate {
            file: template_path.clone(),
            message: e.to_string(),
        })?;

    let output_path = root.join(OUTPUT_FILE);
    write_file(&output_path, &to_four_space_json(&config)?)?;

    Ok(McpReport {
        output_path,
        missing,
    })
}

/// Parse `.env` text into ordered key/value pairs.
///
/// Blank lines and `#` comments are skipped. The first `=` splits key
/// from value; a line without one is ignored, a trailing `=` keeps an
/// empty value. No quoting or escape handling.
pub fn parse_env_file(text: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.push((key.to_string(), value.trim().to_string()));
        }
    }
    vars
}

/// Placeholder names in first-appearance order, deduplicated.
fn required_vars(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    for capture in placeholder_pattern().captures_iter(template) {
        let name = capture[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn substitute(template: &str, vars: &BTreeMap<String, String>) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

// Four-space indentation, keys in map order (alphabetical), no
// trailing newline.
fn to_four_space_json(value: &serde_json::Value) -> ConveyorResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
