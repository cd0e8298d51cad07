//! `catalog category` - maintain the set of known category ids.
//!
//! Categories are owned by another part of the catalog; this tool only
//! records which ids exist so genre writes can be checked against them.

use tracing::{info, instrument};

use crate::{
    cli::{CategoryCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    store::Stores,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: CategoryCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let stores = Stores::open(&global, &config)?;

    match cmd {
        CategoryCommands::Add { ids } => {
            let mut added = Vec::new();
            for id in &ids {
                if stores.add_category(id)? {
                    added.push(id.clone());
                } else if !output.is_json() {
                    output.warning(&format!("Category {id} is already known"))?;
                }
            }
            info!(requested = ids.len(), added = added.len(), "Categories registered");

            if output.is_json() {
                output.json(&added)?;
            } else if !added.is_empty() {
                output.success(&format!("Added categories: {}", added.join(", ")))?;
            }
        }

        CategoryCommands::List => {
            let ids: Vec<String> = stores
                .list_categories()?
                .into_iter()
                .map(|id| id.into_string())
                .collect();

            if output.is_json() {
                output.json(&ids)?;
            } else if ids.is_empty() {
                output.info("No categories registered")?;
            } else {
                for id in &ids {
                    output.print(id)?;
                }
            }
        }
    }

    Ok(())
}
