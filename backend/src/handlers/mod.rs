//! HTTP handlers for the Obsidian API

use serde::Serialize;

mod health;
mod history;
mod material;
mod order;
mod product;
mod production;
mod recipe;

pub use health::*;
pub use history::*;
pub use material::*;
pub use order::*;
pub use product::*;
pub use production::*;
pub use recipe::*;

/// Response for delete endpoints, echoing the removed record
#[derive(Serialize)]
pub struct Deleted<T> {
    pub ok: bool,
    pub removed: T,
}

impl<T> Deleted<T> {
    fn of(removed: T) -> Self {
        Self { ok: true, removed }
    }
}
