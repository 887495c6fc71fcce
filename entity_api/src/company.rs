use super::error::{EntityApiErrorKind, Error};
use chrono::Utc;
use entity::companies::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, Condition, ConnectionTrait,
    QuerySelect, TransactionTrait,
};

/// Cap on how many candidates a fuzzy name search returns. Row order is
/// whatever the storage engine hands back.
const NAME_SEARCH_LIMIT: u64 = 5;

/// Case-insensitive substring match against both localized company names.
/// No match is an empty vec, not an error.
pub async fn find_by_name_fragment(
    db: &impl ConnectionTrait,
    fragment: &str,
) -> Result<Vec<Model>, Error> {
    let pattern = format!("%{fragment}%");

    Ok(Entity::find()
        .filter(
            Condition::any()
                .add(Expr::col(Column::NameCn).ilike(pattern.clone()))
                .add(Expr::col(Column::NameEn).ilike(pattern)),
        )
        .limit(NAME_SEARCH_LIMIT)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

/// Points a company at a new owning user and contact email, refreshing
/// `updated_at`, inside a single transaction. Any fault rolls the whole
/// update back; no partial field change ever persists.
pub async fn reassign_contact(
    db: &(impl ConnectionTrait + TransactionTrait),
    company_id: Id,
    user_id: Id,
    contact_email: &str,
) -> Result<Model, Error> {
    let txn = db.begin().await?;

    let company = find_by_id(&txn, company_id).await?;
    debug!("Company before contact reassignment: {company:?}");

    let company_active_model = ActiveModel {
        id: Unchanged(company.id),
        user_id: Set(Some(user_id)),
        contact_email: Set(Some(contact_email.to_owned())),
        updated_at: Set(Utc::now().into()),
        ..Default::default()
    };

    let updated = company_active_model.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}
