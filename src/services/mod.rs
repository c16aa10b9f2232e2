// Services module - Business logic

pub mod cards;
pub mod token;
