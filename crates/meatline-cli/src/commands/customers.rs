//! Customer command handlers.

use tabled::Tabled;

use meatline_api::ApiClient;
use meatline_api::resources::customers::{Customer, CustomerFilter};

use crate::cli::{CustomersArgs, CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Debt")]
    debt: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            phone: output::dash(c.phone.clone()),
            debt: output::dash(c.debt.map(|d| format!("{d:.2}"))),
            tags: c
                .behaviors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

fn detail(c: &Customer) -> String {
    let lines = vec![
        format!("ID:       {}", c.id),
        format!("Name:     {}", c.name),
        format!("Phone:    {}", c.phone.as_deref().unwrap_or("-")),
        format!("Address:  {}", c.address.as_deref().unwrap_or("-")),
        format!(
            "Debt:     {}",
            c.debt.map_or_else(|| "-".into(), |d| format!("{d:.2}"))
        ),
    ];
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ApiClient,
    args: CustomersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List {
            search,
            behaviors,
            has_debt,
            page,
        } => {
            let filter = CustomerFilter {
                search,
                behaviors: if behaviors.is_empty() {
                    None
                } else {
                    Some(behaviors)
                },
                has_debt,
                page: Some(page.page),
                page_size: Some(page.page_size),
                ..CustomerFilter::default()
            };
            let listing = client.list_customers(&filter).await?;

            let rows: Vec<CustomerRow> = listing.data.iter().map(CustomerRow::from).collect();
            println!("{}", output::render_list(&global.output, rows, &listing.data)?);
            println!(
                "{}",
                output::pagination_footer(listing.count, page.page, page.page_size)
            );
            Ok(())
        }

        CustomersCommand::Get { id } => {
            let customer = match client.get_customer(id).await {
                Ok(customer) => customer,
                Err(meatline_api::Error::Api { status: 404, .. }) => {
                    return Err(CliError::NotFound {
                        resource: "customer".into(),
                        identifier: id.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            };
            if global.output == "json" {
                println!("{}", serde_json::to_string_pretty(&customer)?);
            } else {
                println!("{}", detail(&customer));
            }
            Ok(())
        }
    }
}
