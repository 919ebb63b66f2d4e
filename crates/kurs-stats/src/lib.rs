//! Statistics and view model of the Kursverwaltung overview
//!
//! Everything in this crate is a pure function of a [`kurs_core::Snapshot`]
//! and a reference time. Fetching lives in `kurs-client`.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod aggregate;
pub mod overview;

pub use aggregate::{CourseEnrollmentCount, PaymentCounts};
pub use overview::{Headline, KpiTile, Overview, PaymentPanel, UpcomingCourse};
