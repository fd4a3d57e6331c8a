pub mod models;
pub mod prompt;
pub mod roster;
pub mod transcript;
