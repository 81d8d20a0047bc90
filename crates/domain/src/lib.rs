mod account;
mod shared;

pub use account::Account;
pub use shared::entity::Entity;
