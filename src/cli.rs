//! CLI definitions for azship
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "azship",
    version,
    about = "Provision and zip-deploy web apps to Azure App Service",
    long_about = "Provisions a resource group, app service plan and web app,\nthen packages a local directory and zip-deploys it to the production slot."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision resources and deploy a local app directory
    Deploy {
        /// Resource group to deploy into (created if absent)
        #[arg(long, required = true)]
        resource_group: String,

        /// Base web app name (a random suffix is appended)
        #[arg(long, required = true)]
        name: String,

        /// Azure region, e.g. westeurope
        #[arg(long, required = true)]
        location: String,

        /// Local application directory to package and upload
        #[arg(long, required = true)]
        src_path: String,
    },
}
