mod category;
mod inventory;
mod serde_helpers;

pub use category::*;
pub use inventory::*;
