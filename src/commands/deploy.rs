//! End-to-end provision + zip-deploy workflow
//!
//! Strictly linear: preflight, derive names, ensure resource group, create
//! plan, create web app, package, upload, report. The first failing step
//! aborts the run; resources created by earlier steps are left in place.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::archive;
use crate::azure::AzCli;
use crate::error::{PackageError, ShipError};
use crate::naming;
use crate::preflight;
use crate::ui;

pub async fn execute(
    resource_group: String,
    name: String,
    location: String,
    src_path: String,
) -> Result<(), ShipError> {
    ui::print_header("azship · App Service deploy");

    let az = AzCli::from_env();

    // Step 1: Preflight
    info!("━━━ Step 1/5: Preflight ━━━");
    preflight::ensure_logged_in(&az).await?;
    let src_dir = Path::new(&src_path);
    preflight::ensure_source_dir(src_dir)?;

    // Step 2: Derive names
    let plan = naming::plan_name(&name);
    let app = naming::randomize_app_name(&name);

    info!("🎯 App name: {}", app);
    info!("🧱 Plan: {} (sku {})", plan, naming::SKU);
    info!("🌍 Location: {}", location);
    println!();

    // Step 3: Provision
    info!("━━━ Step 2/5: Provision ━━━");
    az.ensure_group(&resource_group, &location).await?;
    az.create_plan(&plan, &resource_group).await?;
    let webapp = az.create_webapp(&app, &resource_group, &plan).await?;
    info!("🌐 Web app '{}' created", webapp.name);
    println!();

    // Step 4: Package
    info!("━━━ Step 3/5: Package ━━━");
    let zip_path = archive::archive_path(&app);
    info!("📦 Packaging {} -> {}", src_dir.display(), zip_path.display());
    archive::pack_directory(src_dir, &zip_path)?;
    println!();

    // Step 5: Upload to the production slot
    info!("━━━ Step 4/5: Deploy ━━━");
    info!("🚀 Uploading package to '{}' (production slot)...", app);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Deploying to {}...", app));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let zip_str = zip_path.to_str().ok_or_else(|| PackageError::NonUnicodePath {
        path: zip_path.display().to_string(),
    })?;
    az.zip_deploy(&app, &resource_group, zip_str).await?;

    pb.finish_with_message("✅ Package uploaded");
    println!();

    // Step 6: Cleanup & report
    info!("━━━ Step 5/5: Cleanup ━━━");
    tokio::fs::remove_file(&zip_path)
        .await
        .map_err(PackageError::Io)?;
    info!("🧹 Removed temporary archive {}", zip_path.display());
    println!();

    ui::print_success("Deployment complete!");
    println!();
    ui::print_info(&format!("Your app is live at: {}", webapp.url()));
    println!();
    println!("Next steps:");
    println!("  • Stream logs:   az webapp log tail -g {} -n {}", resource_group, app);
    println!("  • Tear down:     az group delete --name {}", resource_group);
    println!();

    Ok(())
}
