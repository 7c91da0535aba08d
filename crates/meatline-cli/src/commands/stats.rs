//! Statistics command handlers.
//!
//! Date flags are calendar days; the API crate serializes them in the
//! `YYYY-MM-DD` form the statistics endpoints require.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tabled::Tabled;

use meatline_api::ApiClient;
use meatline_api::resources::stats::StatsFilter;

use crate::cli::{GlobalOpts, StatsArgs, StatsCommand};
use crate::error::CliError;
use crate::output;

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[derive(Tabled)]
struct TopProductRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Sold (kg)")]
    quantity: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

pub async fn handle(
    client: &ApiClient,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StatsCommand::Summary {
            from,
            to,
            granularity,
        } => {
            let filter = StatsFilter {
                from: from.map(day_start),
                to: to.map(day_start),
                granularity,
            };
            let summary = client.sales_summary(&filter).await?;

            println!("total sales:   {:.2}", summary.total_sales);
            println!("orders:        {}", summary.order_count);
            println!("average order: {:.2}", summary.average_order);
            for point in &summary.series {
                println!(
                    "  {}  {:>12.2}  ({} orders)",
                    point.date, point.total, point.order_count
                );
            }
            Ok(())
        }

        StatsCommand::TopProducts { from, to } => {
            let filter = StatsFilter {
                from: from.map(day_start),
                to: to.map(day_start),
                granularity: None,
            };
            let products = client.top_products(&filter).await?;

            let rows: Vec<TopProductRow> = products
                .iter()
                .map(|p| TopProductRow {
                    name: p.name.clone(),
                    quantity: format!("{:.1}", p.quantity_kg),
                    revenue: format!("{:.2}", p.revenue),
                })
                .collect();
            println!("{}", output::render_list(&global.output, rows, &products)?);
            Ok(())
        }
    }
}
