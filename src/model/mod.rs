pub mod history;
pub mod limits;
pub mod rules;
pub mod score;
pub mod transcript;
