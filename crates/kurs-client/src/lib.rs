//! Record fetching for the Kursverwaltung overview
//!
//! [`DataSource`] abstracts the remote data service. [`LivingAppsClient`] is
//! the REST implementation and [`load_snapshot`] joins the five collection
//! fetches into one [`kurs_core::Snapshot`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod living_apps;
pub mod mock;
pub mod snapshot;
pub mod source;

pub use error::{ClientError, ClientResult};
pub use living_apps::LivingAppsClient;
pub use mock::MockDataSource;
pub use snapshot::load_snapshot;
pub use source::DataSource;
