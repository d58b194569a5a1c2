pub mod chat;
pub mod loader;
pub mod recipe_card;
