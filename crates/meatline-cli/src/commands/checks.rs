//! Check command handlers.

use tabled::Tabled;

use meatline_api::ApiClient;
use meatline_api::resources::checks::{Check, CheckFilter};

use crate::cli::{ChecksArgs, ChecksCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Bank")]
    bank: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Due")]
    due: String,
}

impl From<&Check> for CheckRow {
    fn from(c: &Check) -> Self {
        Self {
            id: c.id,
            customer_id: c.customer_id,
            bank: output::dash(c.bank.clone()),
            amount: format!("{:.2}", c.amount),
            status: c.status.to_string(),
            due: c.due_at.format("%Y-%m-%d").to_string(),
        }
    }
}

pub async fn handle(
    client: &ApiClient,
    args: ChecksArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ChecksCommand::List {
            status,
            customer_id,
            amount_min,
            amount_max,
            page,
        } => {
            let filter = CheckFilter {
                status,
                customer_id,
                amount_min,
                amount_max,
                page: Some(page.page),
                page_size: Some(page.page_size),
                ..CheckFilter::default()
            };
            let listing = client.list_checks(&filter).await?;

            let rows: Vec<CheckRow> = listing.data.iter().map(CheckRow::from).collect();
            println!("{}", output::render_list(&global.output, rows, &listing.data)?);
            println!(
                "total amount over filter: {:.2}",
                listing.metadata.total_amount
            );
            println!(
                "{}",
                output::pagination_footer(listing.count, page.page, page.page_size)
            );
            Ok(())
        }
    }
}
