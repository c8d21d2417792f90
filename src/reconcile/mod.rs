mod engine;
mod keys;

pub use engine::{reconcile, reconcile_family};
pub use keys::build_keys;
