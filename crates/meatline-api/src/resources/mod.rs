//! Endpoint modules: one file per backend resource.
//!
//! Each module owns its filter type (query-string building via
//! [`crate::query::QueryBuilder`]), its transport models, and inherent
//! methods on [`crate::ApiClient`]. Filters validate nothing beyond their
//! types — out-of-range values pass through uninterpreted; closed enums
//! keep unrecognized wire values out of the builder boundary.

pub mod categories;
pub mod checks;
pub mod customer_requests;
pub mod customers;
pub mod dispatchings;
pub mod follow_ups;
pub mod invoices;
pub mod order_histories;
pub mod orders;
pub mod produces;
pub mod products;
pub mod receivings;
pub mod reminders;
pub mod return_requests;
pub mod stats;
pub mod tickets;
pub mod wallets;
