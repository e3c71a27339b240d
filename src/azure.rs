//! Thin async wrappers over the Azure CLI
//!
//! Every control-plane operation shells out to `az` (path resolved via the
//! `AZ_BIN` envvar, falling back to PATH) and blocks until the remote call
//! completes. No retries; failures carry the az stderr verbatim so the
//! operator sees the same diagnostic az would print.

use serde::Deserialize;
use tokio::process::Command;
use tracing::info;

use crate::error::ProvisionError;
use crate::naming;
use crate::tools::{get_tool_path, tools};

/// Handle to the az binary
pub struct AzCli {
    program: String,
}

/// Subset of the `az webapp create` JSON response we care about
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApp {
    pub name: String,
    pub default_host_name: String,
}

impl WebApp {
    /// Public URL of the production slot
    pub fn url(&self) -> String {
        format!("https://{}", self.default_host_name)
    }
}

impl AzCli {
    pub fn from_env() -> Self {
        Self {
            program: get_tool_path(tools::AZ),
        }
    }

    /// Run an az subcommand, returning stdout on success
    async fn run(&self, args: &[&str]) -> Result<String, ProvisionError> {
        let command = args.join(" ");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| ProvisionError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProvisionError::CommandFailed { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Check whether an az session is active (`az account show`)
    pub async fn account_show(&self) -> Result<(), ProvisionError> {
        self.run(&["account", "show", "--output", "none"])
            .await
            .map(|_| ())
    }

    /// Whether the resource group exists (`az group exists`)
    pub async fn group_exists(&self, name: &str) -> Result<bool, ProvisionError> {
        let stdout = self.run(&["group", "exists", "--name", name]).await?;

        parse_az_bool(&stdout).ok_or_else(|| ProvisionError::UnexpectedOutput {
            command: format!("group exists --name {}", name),
            message: format!("expected true/false, got {:?}", stdout.trim()),
        })
    }

    pub async fn create_group(&self, name: &str, location: &str) -> Result<(), ProvisionError> {
        self.run(&[
            "group", "create", "--name", name, "--location", location, "--output", "none",
        ])
        .await
        .map(|_| ())
    }

    /// Idempotent resource-group ensure: create if absent, skip with a notice
    /// if present. Running this twice never errors on "already exists".
    pub async fn ensure_group(&self, name: &str, location: &str) -> Result<(), ProvisionError> {
        if self.group_exists(name).await? {
            info!("📁 Resource group '{}' already exists, skipping", name);
            return Ok(());
        }

        info!("📁 Creating resource group '{}' in {}", name, location);
        self.create_group(name, location).await
    }

    /// Create the app service plan. Unconditional: re-running against an
    /// existing plan name is left to the control plane to accept or reject.
    pub async fn create_plan(&self, plan: &str, resource_group: &str) -> Result<(), ProvisionError> {
        info!("🧱 Creating app service plan '{}' (sku {})", plan, naming::SKU);
        self.run(&[
            "appservice",
            "plan",
            "create",
            "--name",
            plan,
            "--resource-group",
            resource_group,
            "--sku",
            naming::SKU,
            "--is-linux",
            "--output",
            "none",
        ])
        .await
        .map(|_| ())
    }

    /// Create the web app bound to the given plan and runtime stack.
    ///
    /// A global name collision is reported as `ProvisionError::NameTaken`
    /// rather than a raw az error dump; everything else propagates verbatim.
    pub async fn create_webapp(
        &self,
        app: &str,
        resource_group: &str,
        plan: &str,
    ) -> Result<WebApp, ProvisionError> {
        let runtime = naming::runtime_stack();
        info!("🌐 Creating web app '{}' (runtime {})", app, runtime);

        let stdout = self
            .run(&[
                "webapp",
                "create",
                "--name",
                app,
                "--resource-group",
                resource_group,
                "--plan",
                plan,
                "--runtime",
                &runtime,
                "--output",
                "json",
            ])
            .await
            .map_err(|err| match err {
                ProvisionError::CommandFailed { stderr, .. } if is_name_conflict(&stderr) => {
                    ProvisionError::NameTaken {
                        name: app.to_string(),
                    }
                }
                other => other,
            })?;

        parse_webapp(&stdout).map_err(|message| ProvisionError::UnexpectedOutput {
            command: format!("webapp create --name {}", app),
            message,
        })
    }

    /// Zip-deploy the archive to the web app's production slot
    pub async fn zip_deploy(
        &self,
        app: &str,
        resource_group: &str,
        zip_path: &str,
    ) -> Result<(), ProvisionError> {
        self.run(&[
            "webapp",
            "deploy",
            "--name",
            app,
            "--resource-group",
            resource_group,
            "--src-path",
            zip_path,
            "--type",
            "zip",
            "--output",
            "none",
        ])
        .await
        .map(|_| ())
    }
}

/// Parse the bare `true`/`false` stdout of `az group exists`
fn parse_az_bool(stdout: &str) -> Option<bool> {
    match stdout.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_webapp(json: &str) -> Result<WebApp, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Heuristic for az's global-name-collision diagnostics.
///
/// az phrases this as "Website with given name <x> already exists." or, from
/// newer API versions, "The name '<x>' is not available."
fn is_name_conflict(stderr: &str) -> bool {
    let lowered = stderr.to_lowercase();
    (lowered.contains("already exists") && lowered.contains("name"))
        || lowered.contains("is not available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_az_bool() {
        assert_eq!(parse_az_bool("true\n"), Some(true));
        assert_eq!(parse_az_bool("false"), Some(false));
        assert_eq!(parse_az_bool("maybe"), None);
        assert_eq!(parse_az_bool(""), None);
    }

    #[test]
    fn test_parse_webapp_response() {
        let json = r#"{
            "name": "shop-qkzpt",
            "defaultHostName": "shop-qkzpt.azurewebsites.net",
            "state": "Running",
            "location": "West Europe"
        }"#;

        let app = parse_webapp(json).unwrap();
        assert_eq!(app.name, "shop-qkzpt");
        assert_eq!(app.default_host_name, "shop-qkzpt.azurewebsites.net");
        assert_eq!(app.url(), "https://shop-qkzpt.azurewebsites.net");
    }

    #[test]
    fn test_parse_webapp_rejects_garbage() {
        assert!(parse_webapp("not json").is_err());
    }

    #[test]
    fn test_name_conflict_detection() {
        assert!(is_name_conflict(
            "Website with given name shop-qkzpt already exists."
        ));
        assert!(is_name_conflict("The name 'shop-qkzpt' is not available."));
        assert!(!is_name_conflict("Operation returned 403 Forbidden"));
        assert!(!is_name_conflict("quota exceeded for subscription"));
    }
}
