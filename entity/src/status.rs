use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account lifecycle status, varchar-backed like [`crate::roles::Role`].
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "approved")]
    Approved,
}

impl std::fmt::Display for Status {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(fmt, "pending"),
            Status::Active => write!(fmt, "active"),
            Status::Approved => write!(fmt, "approved"),
        }
    }
}
