mod document;
mod extract;

pub use document::{BgpConfig, BgpGroup, FamilyLimit};
pub use extract::extract;
