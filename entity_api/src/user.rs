use super::error::Error;
use entity::prelude::Users;
use entity::users::{Column, Model};
use sea_orm::{entity::prelude::*, ConnectionTrait};

/// Exact-match lookup. Absence is a normal, reportable outcome, not a
/// failure, so the result is an `Option` rather than an error.
pub async fn find_by_email(db: &impl ConnectionTrait, email: &str) -> Result<Option<Model>, Error> {
    Ok(Users::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use chrono::Utc;
    use entity::{roles::Role, status::Status, users, Id};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn find_by_email_returns_the_matching_account() -> Result<(), Error> {
        let now = Utc::now();
        let user = users::Model {
            id: Id::new_v4(),
            email: "leo@polgroupusa.com".to_owned(),
            name: Some("Leo".to_owned()),
            role: Role::Company,
            status: Status::Active,
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user.clone()]])
            .into_connection();

        assert_eq!(
            find_by_email(&db, "leo@polgroupusa.com").await?,
            Some(user)
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_by_email_returns_none_for_unknown_email() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        assert_eq!(find_by_email(&db, "nobody@example.com").await?, None);

        Ok(())
    }
}
