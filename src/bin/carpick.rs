use anyhow::{Context, Result};
use car_advisor::config::DB_ENV;
use car_advisor::{
    AdvisorConfig, Criteria, DatabaseLocation, PowerBand, PriceBand, RecommendationView,
    Recommender,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[clap(version, about = "Pick a car by body type, price, brand and power")]
struct Cli {
    /// Catalog database file, or `:memory:`.
    #[clap(long, global = true, env = DB_ENV)]
    db: Option<String>,

    /// Do not seed an empty catalog.
    #[clap(long, global = true)]
    no_seed: bool,

    /// Log filter used when RUST_LOG is unset.
    #[clap(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON.
    #[clap(long, global = true)]
    log_json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend cars matching the given criteria, cheapest first.
    Recommend(RecommendArgs),
    /// List the brands in the catalog.
    Brands,
    /// List the body types in the catalog.
    BodyTypes,
    /// Print the order in which filters are applied.
    Stages,
    /// Print the number of cars in the catalog.
    Count,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    #[clap(long)]
    body_type: Option<String>,

    #[clap(long)]
    brand: Option<String>,

    /// Price preset: any, 1m, 1-2m, 2-3m, 3-5m, 5-10m, 10m+.
    #[clap(long)]
    price: Option<PriceBand>,

    #[clap(long)]
    min_price: Option<u64>,

    #[clap(long)]
    max_price: Option<u64>,

    /// Power preset: any, 100, 100-150, 150-200, 200-300, 300+.
    #[clap(long)]
    power: Option<PowerBand>,

    #[clap(long)]
    min_power: Option<u32>,

    #[clap(long)]
    max_power: Option<u32>,

    /// Print results as JSON.
    #[clap(long)]
    json: bool,
}

impl RecommendArgs {
    /// Explicit bounds override the bounds of a preset.
    fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::new();
        if let Some(band) = self.price {
            criteria = criteria.with_price_band(band);
        }
        if let Some(band) = self.power {
            criteria = criteria.with_power_band(band);
        }
        criteria.body_type = self.body_type.clone();
        criteria.brand = self.brand.clone();
        criteria.min_price = self.min_price.or(criteria.min_price);
        criteria.max_price = self.max_price.or(criteria.max_price);
        criteria.min_power = self.min_power.or(criteria.min_power);
        criteria.max_power = self.max_power.or(criteria.max_power);
        criteria
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    let config = config_from(&cli);
    let store = config
        .open_store()
        .with_context(|| format!("opening catalog {:?}", config.database))?;
    let recommender = Recommender::new(store);

    match &cli.command {
        Command::Recommend(args) => {
            let criteria = args.criteria();
            criteria.validate()?;
            let views = recommender.recommend(&criteria)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print_table(&views);
            }
        }
        Command::Brands => recommender.brands()?.iter().for_each(|b| println!("{b}")),
        Command::BodyTypes => recommender.body_types()?.iter().for_each(|b| println!("{b}")),
        Command::Stages => println!("{}", recommender.pipeline().stage_order().join(" -> ")),
        Command::Count => println!("{}", recommender.catalog_size()?),
    }

    recommender.into_store().close()?;
    Ok(())
}

fn config_from(cli: &Cli) -> AdvisorConfig {
    let mut config = AdvisorConfig::from_env();
    if let Some(db) = &cli.db {
        config.database = DatabaseLocation::parse(db);
    }
    if cli.no_seed {
        config.seed_on_startup = false;
    }
    config
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_table(views: &[RecommendationView]) {
    if views.is_empty() {
        println!("No cars match the selected criteria");
        return;
    }

    println!(
        "{:>3}  {:<14} {:<14} {:<12} {:>12} {:>6}",
        "#", "Brand", "Model", "Body", "Price", "Power"
    );
    for (i, view) in views.iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:<14} {:<12} {:>12} {:>6}",
            i + 1,
            view.brand,
            view.model,
            view.body_type,
            format_price(view.price),
            view.power
        );
    }
    println!("Found {} cars", views.len());
}

/// Group digits in threes separated by spaces: `1500000` -> `1 500 000`.
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
