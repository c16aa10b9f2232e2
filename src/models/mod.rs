// Models module - Database entity representations

pub mod card;
pub mod user;

pub use card::{CardFields, CardId, CardView, DiscountCard};
pub use user::{User, UserId};
