//! Domain models for the Obsidian inventory platform

mod material;
mod order;
mod product;
mod production;
mod recipe;
mod sale;
mod stock_movement;

pub use material::*;
pub use order::*;
pub use product::*;
pub use production::*;
pub use recipe::*;
pub use sale::*;
pub use stock_movement::*;
