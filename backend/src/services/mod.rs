//! Business logic services for the Obsidian inventory platform

pub mod history;
pub mod material;
pub mod order;
pub mod product;
pub mod production;
pub mod recipe;

pub use history::HistoryService;
pub use material::MaterialService;
pub use order::OrderService;
pub use product::ProductService;
pub use production::ProductionService;
pub use recipe::RecipeService;
