pub use entity::{companies, roles, status, users, Id};

pub mod company;
pub mod error;
pub mod user;
