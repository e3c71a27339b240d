//! Runtime tool path resolution
//!
//! For each external tool (e.g. `az`) we check an environment variable
//! `{TOOL}_BIN` (e.g. `AZ_BIN`) and fall back to PATH-based invocation if the
//! envvar is not set. This keeps the binary path overridable in CI images and
//! easy to mock in tests.

use std::env;

/// Get the path to an external tool
///
/// Checks for an environment variable `{TOOL}_BIN` (uppercase tool name +
/// "_BIN", hyphens mapped to underscores so the result is a valid envvar
/// name). Falls back to the tool name itself if the envvar is not set, which
/// relies on PATH.
pub fn get_tool_path(tool: &str) -> String {
    let env_var = format!("{}_BIN", tool.to_uppercase().replace('-', "_"));
    env::var(&env_var).unwrap_or_else(|_| tool.to_string())
}

/// Common tool names (for documentation and IDE autocomplete)
pub mod tools {
    pub const AZ: &str = "az";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_get_tool_path_from_env() {
        env::set_var("SOMETOOL_BIN", "/custom/path/to/sometool");
        assert_eq!(get_tool_path("sometool"), "/custom/path/to/sometool");
        env::remove_var("SOMETOOL_BIN");
    }

    #[test]
    fn test_get_tool_path_maps_hyphens_to_underscores() {
        env::set_var("TEST_TOOL_BIN", "/custom/path/to/test-tool");
        assert_eq!(get_tool_path("test-tool"), "/custom/path/to/test-tool");
        env::remove_var("TEST_TOOL_BIN");
    }

    #[test]
    fn test_get_tool_path_fallback() {
        env::remove_var("MISSING_TOOL_BIN");
        assert_eq!(get_tool_path("missing-tool"), "missing-tool");
    }
}
