use anyhow::{Context, Result};
use catalog::{load_catalog, sample_catalog, Catalog, Color, Product, Size};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use specification::prelude::*;
use specification::ProductFilter;
use std::path::PathBuf;
use std::time::Instant;

/// spec-filter - select catalog products with composable specifications
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// Path to a catalog file (`name::COLOR::SIZE` per line).
    /// Uses the built-in sample catalog when omitted.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every product in the catalog
    List,

    /// Print the products matching the given criteria
    Filter(FilterArgs),

    /// Compare the per-criterion filter with specifications
    Demo,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Match this color (repeat to accept several)
    #[arg(long = "color")]
    colors: Vec<Color>,

    /// Match this size (repeat to accept several)
    #[arg(long = "size")]
    sizes: Vec<Size>,

    /// Match names containing this text (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Require any criterion instead of all of them
    #[arg(long)]
    any: bool,

    /// Invert the match
    #[arg(long)]
    exclude: bool,

    /// Filter on the Rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = open_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Commands::List => handle_list(&catalog),
        Commands::Filter(args) => handle_filter(&catalog, &args)?,
        Commands::Demo => handle_demo(&catalog),
    }

    Ok(())
}

fn open_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let start = Instant::now();
            let catalog = load_catalog(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            tracing::info!(
                "Loaded {} products from {} in {:?}",
                catalog.len(),
                path.display(),
                start.elapsed()
            );
            Ok(catalog)
        }
        None => Ok(sample_catalog()),
    }
}

/// Build one specification from the command-line criteria.
///
/// Values of the same attribute are alternatives (`--color red --color
/// blue` matches either color). The attribute groups are then combined
/// with AND, or with OR when `--any` is set.
fn build_specification(args: &FilterArgs) -> Result<Box<dyn Specification<Product>>> {
    let mut groups: Vec<Box<dyn Specification<Product>>> = Vec::new();

    if !args.colors.is_empty() {
        let colors: Vec<Box<dyn Specification<Product>>> = args
            .colors
            .iter()
            .map(|&color| ColorSpecification::new(color).boxed())
            .collect();
        groups.push(Box::new(AnyOf::try_from_specs(colors)?));
    }
    if !args.sizes.is_empty() {
        let sizes: Vec<Box<dyn Specification<Product>>> = args
            .sizes
            .iter()
            .map(|&size| SizeSpecification::new(size).boxed())
            .collect();
        groups.push(Box::new(AnyOf::try_from_specs(sizes)?));
    }
    if let Some(name) = &args.name {
        groups.push(NameSpecification::contains(name).boxed());
    }

    let combined: Box<dyn Specification<Product>> = if args.any {
        Box::new(
            AnyOf::try_from_specs(groups)
                .context("No criteria given; pass --color, --size or --name")?,
        )
    } else {
        Box::new(
            AllOf::try_from_specs(groups)
                .context("No criteria given; pass --color, --size or --name")?,
        )
    };

    if args.exclude {
        Ok(combined.not().boxed())
    } else {
        Ok(combined)
    }
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog) {
    println!("{}", format!("Catalog ({} products):", catalog.len()).bold().blue());
    for product in catalog {
        print_product(product);
    }
}

/// Handle the 'filter' command
fn handle_filter(catalog: &Catalog, args: &FilterArgs) -> Result<()> {
    let spec = build_specification(args)?;

    let start = Instant::now();
    let matches = find_matches(catalog, spec.as_ref(), args.parallel);
    tracing::debug!("Filtered {} products in {:?}", catalog.len(), start.elapsed());

    if args.json {
        println!("{}", render_json(&matches)?);
        return Ok(());
    }

    println!("{}", format!("Products where {}:", spec.name()).bold().blue());
    if matches.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for product in matches {
        print_product(product);
    }
    Ok(())
}

fn find_matches<'a>(
    catalog: &'a Catalog,
    spec: &dyn Specification<Product>,
    parallel: bool,
) -> Vec<&'a Product> {
    if parallel {
        ParallelFilter::new().filter(catalog.products(), spec)
    } else {
        SpecFilter.filter(catalog.products(), spec).collect()
    }
}

/// Render matches as a pretty JSON array of products
fn render_json(matches: &[&Product]) -> Result<String> {
    serde_json::to_string_pretty(matches).context("Failed to serialize matches")
}

/// Handle the 'demo' command
fn handle_demo(catalog: &Catalog) {
    let products = catalog.products();

    println!("{}", "Green products (old):".bold().blue());
    for product in ProductFilter.filter_by_color(products, Color::Green) {
        println!(" - {} is green", product.name);
    }

    // Single criterion
    println!("{}", "Green products (new):".bold().blue());
    let green = ColorSpecification::new(Color::Green);
    for product in SpecFilter.filter(products, &green) {
        println!(" - {} is green", product.name);
    }

    // Two criteria through a combinator
    println!("{}", "Large blue items:".bold().blue());
    let large_blue = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
    for product in SpecFilter.filter(products, &large_blue) {
        println!(" - {} is large and blue", product.name);
    }
}

fn print_product(product: &Product) {
    println!(
        "{}{} is {} {}",
        "- ".green(),
        product.name,
        product.color,
        product.size
    );
}
