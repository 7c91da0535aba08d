//! Argument definitions for the `meatline` binary.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use meatline_api::resources::checks::CheckStatus;
use meatline_api::resources::customers::BehaviorTag;
use meatline_api::resources::orders::OrderStatus;
use meatline_api::resources::stats::Granularity;

#[derive(Parser)]
#[command(
    name = "meatline",
    version,
    about = "Command-line client for the Meatline distribution backend"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct GlobalOpts {
    /// Profile name from the config file.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Backend base URL override.
    #[arg(long, global = true, env = "MEATLINE_BASE_URL")]
    pub base_url: Option<String>,

    /// Access token override.
    #[arg(long, global = true, env = "MEATLINE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Branch identifier override.
    #[arg(long, global = true, env = "MEATLINE_BRANCH")]
    pub branch: Option<String>,

    /// Output format: table or json.
    #[arg(long, global = true, default_value = "table")]
    pub output: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Customer management.
    Customers(CustomersArgs),
    /// Order views.
    Orders(OrdersArgs),
    /// Post-dated check views.
    Checks(ChecksArgs),
    /// Reminder views.
    Reminders(RemindersArgs),
    /// Sales and debt statistics.
    Stats(StatsArgs),
    /// File uploads.
    Files(FilesArgs),
    /// Configuration inspection.
    Config(ConfigArgs),
}

// ── Shared paging flags ─────────────────────────────────────────────

#[derive(Args)]
pub struct PageOpts {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = 20)]
    pub page_size: u32,
}

// ── Customers ───────────────────────────────────────────────────────

#[derive(Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Subcommand)]
pub enum CustomersCommand {
    /// List customers.
    List {
        /// Free-text search over name/phone.
        #[arg(long)]
        search: Option<String>,

        /// Behavior tag filter; repeat for multiple tags.
        #[arg(long = "behavior")]
        behaviors: Vec<BehaviorTag>,

        /// Only customers with (or without) outstanding debt.
        #[arg(long)]
        has_debt: Option<bool>,

        #[command(flatten)]
        page: PageOpts,
    },
    /// Show one customer.
    Get { id: i64 },
}

// ── Orders ──────────────────────────────────────────────────────────

#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders.
    List {
        #[arg(long)]
        status: Option<OrderStatus>,

        #[arg(long)]
        customer_id: Option<i64>,

        #[command(flatten)]
        page: PageOpts,
    },
    /// Show one order with its items.
    Get { id: i64 },
}

// ── Checks ──────────────────────────────────────────────────────────

#[derive(Args)]
pub struct ChecksArgs {
    #[command(subcommand)]
    pub command: ChecksCommand,
}

#[derive(Subcommand)]
pub enum ChecksCommand {
    /// List checks with the filter-wide total.
    List {
        #[arg(long)]
        status: Option<CheckStatus>,

        #[arg(long)]
        customer_id: Option<i64>,

        #[arg(long)]
        amount_min: Option<u64>,

        #[arg(long)]
        amount_max: Option<u64>,

        #[command(flatten)]
        page: PageOpts,
    },
}

// ── Reminders ───────────────────────────────────────────────────────

#[derive(Args)]
pub struct RemindersArgs {
    #[command(subcommand)]
    pub command: RemindersCommand,
}

#[derive(Subcommand)]
pub enum RemindersCommand {
    /// List reminders.
    List {
        /// Only pending (false) or completed (true) reminders.
        #[arg(long)]
        done: Option<bool>,

        #[command(flatten)]
        page: PageOpts,
    },
    /// Mark a reminder as done.
    Done { id: i64 },
}

// ── Stats ───────────────────────────────────────────────────────────

#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Sales totals over a date range.
    Summary {
        /// Range start (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Range end (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long)]
        granularity: Option<Granularity>,
    },
    /// Best-selling products over a date range.
    TopProducts {
        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

// ── Files ───────────────────────────────────────────────────────────

#[derive(Args)]
pub struct FilesArgs {
    #[command(subcommand)]
    pub command: FilesCommand,
}

#[derive(Subcommand)]
pub enum FilesCommand {
    /// Upload one or more files, printing their descriptor ids.
    Upload {
        /// Paths to upload.
        #[arg(required = true)]
        paths: Vec<std::path::PathBuf>,
    },
}

// ── Config ──────────────────────────────────────────────────────────

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved settings for the active profile.
    Show,
    /// Print the config file path.
    Path,
}
