use analytics::{
    InventoryFilter, MetricsEngine, OrderFilter, RecordIndex, Report, ReportKind,
    SalesReportParams, StockThresholds,
};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use configuration::LogFormat;
use core_types::{OrderPriority, OrderStatus, Snapshot, StockStatus};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod render;

/// The main entry point for the Stockroom command-line tool.
fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = configuration::init_logging(&config.logging)?;

    let thresholds = StockThresholds::new(
        config.thresholds.fallback_reorder_point,
        config.thresholds.critical_ratio,
    )?;
    let engine = MetricsEngine::with_thresholds(thresholds);

    match cli.command {
        Commands::Dashboard(args) => handle_dashboard(&engine, args),
        Commands::Report { kind } => match kind {
            ReportCommand::Inventory(args) => handle_inventory_report(&engine, args),
            ReportCommand::Warehouse(args) => handle_warehouse_report(&engine, args),
            ReportCommand::Sales(args) => handle_sales_report(&engine, args),
        },
        Commands::Inventory(args) => handle_inventory(&engine, args),
        Commands::Orders(args) => handle_orders(&engine, args),
        Commands::Alerts(args) => handle_alerts(&engine, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Warehouse dashboard metrics and reports over a snapshot exported from the backend.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults to ./stockroom.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides logging.format from the config file.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard statistics.
    Dashboard(SnapshotArgs),
    /// Generate an exportable report.
    Report {
        #[command(subcommand)]
        kind: ReportCommand,
    },
    /// Browse inventory lines with optional filters.
    Inventory(InventoryArgs),
    /// Browse orders with optional filters.
    Orders(OrderArgs),
    /// List inventory lines that need reordering, most severe first.
    Alerts(SnapshotArgs),
}

#[derive(Subcommand)]
enum ReportCommand {
    /// One row per inventory line.
    Inventory(InventoryReportArgs),
    /// One row per warehouse, with fleet totals.
    Warehouse(SnapshotArgs),
    /// Orders placed within a date range.
    Sales(SalesArgs),
}

#[derive(Args)]
struct SnapshotArgs {
    /// JSON file with `products`, `warehouses`, `inventory` and `orders` arrays.
    #[arg(long)]
    snapshot: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InventoryReportArgs {
    #[command(flatten)]
    source: SnapshotArgs,

    /// Only include lines stored in this warehouse.
    #[arg(long)]
    warehouse: Option<String>,
}

#[derive(Args)]
struct SalesArgs {
    #[command(flatten)]
    source: SnapshotArgs,

    /// First order date to include (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Last order date to include (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Only include orders fulfilled from this warehouse.
    #[arg(long)]
    warehouse: Option<String>,
}

#[derive(Args)]
struct InventoryArgs {
    #[command(flatten)]
    source: SnapshotArgs,

    /// Case-insensitive match on product name or SKU.
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    warehouse: Option<String>,

    /// One of: out-of-stock, critical, low, normal.
    #[arg(long)]
    status: Option<StockStatus>,
}

#[derive(Args)]
struct OrderArgs {
    #[command(flatten)]
    source: SnapshotArgs,

    /// Case-insensitive match on order number, customer name or customer email.
    #[arg(long)]
    search: Option<String>,

    /// One of: pending, processing, shipped, delivered, cancelled.
    #[arg(long)]
    status: Option<OrderStatus>,

    /// One of: low, normal, high, urgent.
    #[arg(long)]
    priority: Option<OrderPriority>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_dashboard(engine: &MetricsEngine, args: SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let stats = engine.aggregate_dashboard_stats(
        &snapshot.products,
        &snapshot.orders,
        &snapshot.warehouses,
        &snapshot.inventory,
    );

    if args.json {
        print_json(&stats)
    } else {
        println!("{}", render::dashboard(&stats));
        Ok(())
    }
}

fn handle_inventory_report(engine: &MetricsEngine, args: InventoryReportArgs) -> Result<()> {
    let mut snapshot = load_snapshot(&args.source.snapshot)?;
    if let Some(warehouse_id) = &args.warehouse {
        snapshot.inventory.retain(|line| &line.warehouse_id == warehouse_id);
    }

    let index = RecordIndex::from_snapshot(&snapshot);
    let rows = engine.inventory_report(&snapshot.inventory, &index);

    if args.source.json {
        print_json(&Report::new(ReportKind::Inventory, rows, Utc::now()))
    } else {
        println!("{}", render::inventory(&rows));
        Ok(())
    }
}

fn handle_warehouse_report(engine: &MetricsEngine, args: SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let rows = engine.warehouse_report(&snapshot.warehouses, &snapshot.inventory);
    let summary = engine.warehouse_summary(&snapshot.warehouses);

    if args.json {
        let data = serde_json::json!({ "summary": summary, "rows": rows });
        print_json(&Report::new(ReportKind::Warehouse, data, Utc::now()))
    } else {
        println!("{}", render::warehouse_summary(&summary));
        println!("{}", render::warehouses(&rows));
        Ok(())
    }
}

fn handle_sales_report(engine: &MetricsEngine, args: SalesArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot)?;
    let index = RecordIndex::from_snapshot(&snapshot);
    let (start, end) = day_bounds(args.from, args.to)?;

    let report = engine.sales_report(
        &snapshot.orders,
        &index,
        SalesReportParams {
            start,
            end,
            warehouse_id: args.warehouse,
        },
    )?;

    if args.source.json {
        print_json(&Report::new(ReportKind::Sales, report, Utc::now()))
    } else {
        println!("{}", render::sales(&report));
        println!("{}", render::sales_summary(&report));
        Ok(())
    }
}

fn handle_inventory(engine: &MetricsEngine, args: InventoryArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot)?;
    let index = RecordIndex::from_snapshot(&snapshot);
    let filter = InventoryFilter {
        search: args.search,
        warehouse_id: args.warehouse,
        status: args.status,
    };

    let lines = engine.filter_inventory(&snapshot.inventory, &index, &filter);
    let summary = engine.inventory_summary(lines.iter().copied(), &index);
    let rows: Vec<_> = lines
        .iter()
        .map(|line| {
            engine.build_inventory_report_row(
                line,
                index.product(&line.product_id),
                index.warehouse(&line.warehouse_id),
            )
        })
        .collect();

    if args.source.json {
        print_json(&serde_json::json!({ "summary": summary, "rows": rows }))
    } else {
        println!("{}", render::inventory_summary(&summary));
        println!("{}", render::inventory(&rows));
        Ok(())
    }
}

fn handle_orders(engine: &MetricsEngine, args: OrderArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot)?;
    let filter = OrderFilter {
        search: args.search,
        status: args.status,
        priority: args.priority,
    };

    let orders = engine.filter_orders(&snapshot.orders, &filter);
    let summary = engine.order_summary(orders.iter().copied());

    if args.source.json {
        print_json(&serde_json::json!({ "summary": summary, "rows": orders }))
    } else {
        let index = RecordIndex::from_snapshot(&snapshot);
        println!("{}", render::order_summary(&summary));
        println!("{}", render::orders(&orders, &index));
        Ok(())
    }
}

fn handle_alerts(engine: &MetricsEngine, args: SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let index = RecordIndex::from_snapshot(&snapshot);
    let alerts = engine.low_stock_alerts(&snapshot.inventory, &index);

    if args.json {
        print_json(&alerts)
    } else if alerts.is_empty() {
        println!("No inventory lines need reordering.");
        Ok(())
    } else {
        println!("{}", render::alerts(&alerts));
        Ok(())
    }
}

// ==============================================================================
// Helpers
// ==============================================================================

/// Reads a snapshot exported from the backend client.
fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

    tracing::info!(
        products = snapshot.products.len(),
        warehouses = snapshot.warehouses.len(),
        inventory = snapshot.inventory.len(),
        orders = snapshot.orders.len(),
        "Snapshot loaded from {}",
        path.display()
    );
    Ok(snapshot)
}

/// Turns two calendar dates into an inclusive UTC window covering both whole days.
fn day_bounds(from: NaiveDate, to: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = from
        .and_hms_opt(0, 0, 0)
        .context("Invalid start of day")?
        .and_utc();
    let end = to
        .and_hms_milli_opt(23, 59, 59, 999)
        .context("Invalid end of day")?
        .and_utc();
    Ok((start, end))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
