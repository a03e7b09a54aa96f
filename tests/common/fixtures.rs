//! Test fixtures - reusable definition and template constants for tests.

/// A complete connector definition with a quoted version
pub const HR_DEFINITION: &str = r#"version: "1.0.3"
name: HR Connector
baseUrl: https://api.acme.dev/hr
"#;

/// The exact JSON artifact body built from `HR_DEFINITION`
pub const HR_ARTIFACT_JSON: &str = "{\n  \"version\": \"1.0.3\",\n  \"baseUrl\": \"https://api.acme.dev/hr\",\n  \"name\": \"HR Connector\"\n}";

/// A second valid definition for multi-unit runs
pub const BILLING_DEFINITION: &str = r#"version: "2.0.0"
name: Billing Connector
"#;

/// A definition that omits the required version field
pub const MISSING_VERSION_DEFINITION: &str = "name: no version here\n";

/// A definition with an unquoted two-part version, which YAML reads as a number
pub const NUMERIC_VERSION_DEFINITION: &str = "version: 1.2\nname: Numeric\n";

/// A definition that is not valid YAML
pub const BROKEN_YAML_DEFINITION: &str = "version: \"1.0.0\"\nname: [unclosed\n";

/// An MCP template with two placeholders
pub const MCP_TEMPLATE: &str = r#"{
    "mcpServers": {
        "github": {
            "command": "github-mcp",
            "env": {
                "GITHUB_TOKEN": "${GITHUB_TOKEN}",
                "GITHUB_ORG": "${GITHUB_ORG}"
            }
        }
    }
}
"#;

/// An MCP template with no placeholders at all
pub const MCP_TEMPLATE_STATIC: &str = "{\n    \"mcpServers\": {}\n}\n";
