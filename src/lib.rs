pub mod check;
pub mod config;
pub mod error;
pub mod family;
pub mod junos;
pub mod models;
pub mod output;
pub mod reconcile;
pub mod registry;
pub mod remediation;
pub mod source;
mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use check::{check, Report};
pub use family::{ByFamily, Family};
