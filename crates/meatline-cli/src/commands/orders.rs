//! Order command handlers.

use tabled::Tabled;

use meatline_api::ApiClient;
use meatline_api::resources::orders::{Order, OrderFilter};

use crate::cli::{GlobalOpts, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            status: o.status.to_string(),
            total: format!("{:.2}", o.total),
            created: o.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn detail(o: &Order) -> String {
    let mut lines = vec![
        format!("ID:       {}", o.id),
        format!("Customer: {}", o.customer_id),
        format!("Status:   {}", o.status),
        format!("Total:    {:.2}", o.total),
        format!("Note:     {}", o.note.as_deref().unwrap_or("-")),
    ];
    if !o.items.is_empty() {
        lines.push("Items:".to_owned());
        for item in &o.items {
            lines.push(format!(
                "  {} x {:.2}kg @ {:.2}",
                item.product_name.as_deref().unwrap_or("(product)"),
                item.quantity_kg,
                item.unit_price
            ));
        }
    }
    lines.join("\n")
}

pub async fn handle(
    client: &ApiClient,
    args: OrdersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrdersCommand::List {
            status,
            customer_id,
            page,
        } => {
            let filter = OrderFilter {
                status,
                customer_id,
                page: Some(page.page),
                page_size: Some(page.page_size),
                ..OrderFilter::default()
            };
            let listing = client.list_orders(&filter).await?;

            let rows: Vec<OrderRow> = listing.data.iter().map(OrderRow::from).collect();
            println!("{}", output::render_list(&global.output, rows, &listing.data)?);
            println!(
                "{}",
                output::pagination_footer(listing.count, page.page, page.page_size)
            );
            Ok(())
        }

        OrdersCommand::Get { id } => {
            let order = match client.get_order(id).await {
                Ok(order) => order,
                Err(meatline_api::Error::Api { status: 404, .. }) => {
                    return Err(CliError::NotFound {
                        resource: "order".into(),
                        identifier: id.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            };
            if global.output == "json" {
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else {
                println!("{}", detail(&order));
            }
            Ok(())
        }
    }
}
