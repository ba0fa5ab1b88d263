use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nutri_plan_rs::catalog::{load_catalog, save_catalog_json};
use nutri_plan_rs::cli::{Cli, Command, SearchArgs, TargetArgs};
use nutri_plan_rs::error::Result;
use nutri_plan_rs::interface::{
    display_catalog_summary, display_menus, display_tagged_foods, display_targets, results_json,
};
use nutri_plan_rs::models::Tag;
use nutri_plan_rs::search::{self, LogObserver};

fn main() {
    // Default info, overridable through RUST_LOG. Logs go to stderr so
    // `--json` output stays clean on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            catalog,
            targets,
            search,
            json,
        } => cmd_plan(&catalog, &targets, &search, json),
        Command::Targets { targets } => cmd_targets(&targets),
        Command::Catalog {
            catalog,
            export,
            tag,
        } => cmd_catalog(&catalog, export.as_deref(), tag),
    }
}

/// Load the catalog, derive targets and run the menu search.
fn cmd_plan(catalog_path: &str, target_args: &TargetArgs, search_args: &SearchArgs, json: bool) -> Result<()> {
    let targets = target_args.resolve()?;
    let config = search_args.resolve()?;
    let catalog = load_catalog(catalog_path)?;

    let menus = search::run(&catalog, &targets, config, &mut LogObserver)?;

    if json {
        println!("{}", results_json(&menus, &catalog, &targets)?);
    } else {
        display_menus(&menus, &catalog, &targets);
    }

    Ok(())
}

fn cmd_targets(target_args: &TargetArgs) -> Result<()> {
    display_targets(&target_args.resolve()?);
    Ok(())
}

fn cmd_catalog(catalog_path: &str, export: Option<&str>, tag: Option<Tag>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    match tag {
        Some(tag) => display_tagged_foods(&catalog, tag),
        None => display_catalog_summary(&catalog),
    }

    if let Some(path) = export {
        save_catalog_json(path, &catalog)?;
        println!("Catalog saved to {}.", path);
    }

    Ok(())
}
