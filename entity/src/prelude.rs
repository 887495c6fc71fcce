pub use super::companies::Entity as Companies;
pub use super::users::Entity as Users;
