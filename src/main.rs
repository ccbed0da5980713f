use bomsource::adapters::outbound::console::StderrProgressReporter;
use bomsource::adapters::outbound::filesystem::JsonProjectStore;
use bomsource::adapters::outbound::network::{
    CachingExchangeRateSource, JlcpcbClient, MouserClient, OpenErApiClient,
};
use bomsource::application::use_cases::RefreshPricesUseCase;
use bomsource::cli::{Args, Command};
use bomsource::config;
use bomsource::ports::outbound::{ExchangeRateSource, ProgressReporter, ProjectStore};
use bomsource::shared::{ExitCode, Result, SourcingError};
use bomsource::sourcing::domain::{ComponentRecord, Project, VendorResult};
use bomsource::sourcing::services::{AggregateTotals, Aggregator};
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();
    let store = JsonProjectStore::new(&args.project);

    match args.command {
        Command::Init { name } => init_project(&store, name),
        Command::Add {
            mouser,
            jlcpcb,
            description,
            category,
            quantity,
            backup,
        } => add_component(&store, mouser, jlcpcb, description, category, quantity, backup),
        Command::Remove { id } => remove_component(&store, &id),
        Command::List => list_components(&store),
        Command::Totals => print_totals(&store),
        Command::Refresh => refresh_project(&store).await,
    }
}

fn init_project(store: &JsonProjectStore, name: String) -> Result<()> {
    if store.exists() {
        return Err(SourcingError::Validation {
            message: format!(
                "Project file {} already exists",
                store.path().display()
            ),
        }
        .into());
    }

    let project = Project::new(name)?;
    store.save(&project)?;
    eprintln!("✅ Created project '{}' at {}", project.name, store.path().display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add_component(
    store: &JsonProjectStore,
    mouser: Option<String>,
    jlcpcb: Option<String>,
    description: String,
    category: String,
    quantity: u32,
    backup: Option<String>,
) -> Result<()> {
    let mut project = store.load()?;
    let component = ComponentRecord::new(mouser, jlcpcb, description, category, quantity, backup)?;
    let id = component.id;
    project.add_component(component);
    store.save(&project)?;
    eprintln!("✅ Added component {}", short_id(&id.to_string()));
    Ok(())
}

fn remove_component(store: &JsonProjectStore, id: &str) -> Result<()> {
    let mut project = store.load()?;
    let removed = project.remove_component(id)?;
    store.save(&project)?;
    eprintln!("✅ Removed component {}", short_id(&removed.id.to_string()));
    Ok(())
}

fn list_components(store: &JsonProjectStore) -> Result<()> {
    let project = store.load()?;
    println!("Project: {} ({} component(s))", project.name, project.components.len());

    for component in &project.components {
        println!(
            "  {}  [{}] {}  x{}",
            short_id(&component.id.to_string()),
            component.category,
            if component.description.is_empty() {
                "-"
            } else {
                &component.description
            },
            component.target_qty
        );
        println!(
            "      Mouser {:<16} {}",
            component.mouser_part_number.as_deref().unwrap_or("-"),
            vendor_cell(&component.mouser, component.target_qty)
        );
        println!(
            "      JLCPCB {:<16} {}",
            component.jlcpcb_part_number.as_deref().unwrap_or("-"),
            vendor_cell(&component.jlcpcb, component.target_qty)
        );
        if let Some(refreshed_at) = component.refreshed_at {
            println!("      last refresh: {}", refreshed_at.format("%Y-%m-%d %H:%M"));
        }
    }
    Ok(())
}

fn print_totals(store: &JsonProjectStore) -> Result<()> {
    let project = store.load()?;
    let totals = Aggregator::compute_totals(&project.components);
    println!("{}", totals_line(&totals));
    Ok(())
}

async fn refresh_project(store: &JsonProjectStore) -> Result<()> {
    let mut project = store.load()?;

    let config = config::discover_config(Path::new("."))?;
    let api_key = config::resolve_mouser_api_key(config.as_ref());
    if api_key.is_none() {
        eprintln!("🔑 No Mouser API key configured, Mouser lookups will be skipped");
    }

    let reporter: Arc<dyn ProgressReporter + Send + Sync> =
        Arc::new(StderrProgressReporter::new());
    let rates: Arc<dyn ExchangeRateSource> = Arc::new(CachingExchangeRateSource::new(
        OpenErApiClient::new()?,
        Arc::clone(&reporter),
    ));
    let mouser = Arc::new(MouserClient::new(api_key)?);
    let jlcpcb = Arc::new(JlcpcbClient::new(rates)?);

    let use_case = RefreshPricesUseCase::new(mouser, jlcpcb, Arc::clone(&reporter));
    let report = use_case.execute(project.components.clone()).await?;

    project.components = report.components;
    store.save(&project)?;

    println!("{}", totals_line(&report.totals));
    Ok(())
}

fn short_id(id: &str) -> &str {
    &id[..8.min(id.len())]
}

fn vendor_cell(result: &VendorResult, target_qty: u32) -> String {
    if !result.is_known() {
        return "stock unknown".to_string();
    }
    if result.has_sufficient_stock(target_qty) {
        format!("📦 {}  {:.2}€", result.stock, result.total_price)
    } else {
        format!("⚠️  {} in stock (need {})", result.stock, target_qty)
    }
}

fn totals_line(totals: &AggregateTotals) -> String {
    format!(
        "MOUSER: {:.2}€   |   JLCPCB: {:.2}€   |   ⚡ HYBRID (BEST): {:.2}€",
        totals.mouser_total, totals.jlcpcb_total, totals.hybrid_total
    )
}
