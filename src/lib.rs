pub mod activity;
pub mod app;
pub mod charts;
pub mod clock;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod source;
pub mod state;
pub mod ui;

pub use app::router;
pub use clock::{Clock, FixedClock, LocalClock};
pub use errors::{FetchError, ValidationError};
pub use scoring::{aggregate, aggregate_at};
pub use source::{resolve_source, DataSource};
pub use state::AppState;
