//! List-view state shared by every list screen: search, dropdown filters,
//! sorting, pagination and the delete confirmation flow.

pub mod config;
pub mod controller;
pub mod delete_flow;
pub mod error;
pub mod filter;
pub mod paginator;
pub mod record;
pub mod sort;

pub use config::{list_config, ExactFilterField, ListConfig, ALL_SENTINEL};
pub use controller::ListViewState;
pub use delete_flow::{DeleteFlow, DeleteFlowState};
pub use error::{ConfigError, DeleteError};
pub use filter::{matches, FilterState};
pub use paginator::{paginate, ViewResult};
pub use record::ListRecord;
pub use sort::SortState;
