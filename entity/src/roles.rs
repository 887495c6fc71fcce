use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account role classification. Stored as a plain varchar rather than a
/// database enum; the value set is owned by the main application.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "company")]
    Company,
    #[sea_orm(string_value = "investor")]
    Investor,
    #[sea_orm(string_value = "viewer")]
    #[default]
    Viewer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(fmt, "admin"),
            Role::Company => write!(fmt, "company"),
            Role::Investor => write!(fmt, "investor"),
            Role::Viewer => write!(fmt, "viewer"),
        }
    }
}
