//! Reminder command handlers.

use tabled::Tabled;

use meatline_api::ApiClient;
use meatline_api::resources::reminders::{Reminder, ReminderFilter};

use crate::cli::{GlobalOpts, RemindersArgs, RemindersCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ReminderRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Done")]
    done: String,
}

impl From<&Reminder> for ReminderRow {
    fn from(r: &Reminder) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            when: r.remind_at.format("%Y-%m-%d %H:%M").to_string(),
            done: if r.done { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle(
    client: &ApiClient,
    args: RemindersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RemindersCommand::List { done, page } => {
            let filter = ReminderFilter {
                done,
                page: Some(page.page),
                page_size: Some(page.page_size),
                ..ReminderFilter::default()
            };
            let listing = client.list_reminders(&filter).await?;

            let rows: Vec<ReminderRow> = listing.data.iter().map(ReminderRow::from).collect();
            println!("{}", output::render_list(&global.output, rows, &listing.data)?);
            println!(
                "{}",
                output::pagination_footer(listing.count, page.page, page.page_size)
            );
            Ok(())
        }

        RemindersCommand::Done { id } => {
            let reminder = client.mark_reminder_done(id).await?;
            println!("reminder {} marked done", reminder.id);
            Ok(())
        }
    }
}
