//! Reassignment of a company's owning user and contact email.
//!
//! The workflow resolves the operator's request into an explicit
//! [`ReassignmentPlan`] before anything is written, so the caller can show
//! the operator exactly what will change and ask for confirmation in
//! between. Execution is a single transaction in the entity layer.

use crate::error::Error;
use entity_api::{companies, company, roles::Role, user, users, Id};
use log::*;
use sea_orm::{ConnectionTrait, TransactionTrait};

/// Operator-supplied inputs naming the company to correct and the account
/// that becomes its new contact.
#[derive(Clone, Debug)]
pub struct ReassignmentRequest {
    /// Substring matched case-insensitively against both company names.
    pub name_fragment: String,
    /// Email of the existing account to hand the company over to.
    pub new_contact_email: String,
    /// Explicit selection when the fragment matches more than one company.
    pub company_id: Option<Id>,
}

/// What resolving a request against the live data produced. Only the
/// `Ready` arm can lead to a write.
#[derive(Debug, PartialEq)]
pub enum Resolution {
    /// The name fragment matched no company.
    CompanyNotFound,
    /// No account exists for the requested email. The workflow never
    /// creates one; that has to happen in the application first.
    ReplacementMissing { candidates: Vec<companies::Model> },
    /// Several companies matched and none was selected explicitly. The
    /// full candidate set goes back to the operator, who re-runs with an
    /// id instead of the tool silently picking one.
    Ambiguous { candidates: Vec<companies::Model> },
    /// Exactly one company selected plus a verified replacement account.
    Ready(ReassignmentPlan),
}

/// A fully resolved update, ready to present to the operator and apply.
#[derive(Debug, PartialEq)]
pub struct ReassignmentPlan {
    pub company: companies::Model,
    pub replacement: users::Model,
}

impl ReassignmentPlan {
    /// Contactable company owners are expected to hold the `company` role.
    /// A mismatch is advisory only; the update still proceeds.
    pub fn role_mismatch(&self) -> bool {
        self.replacement.role != Role::Company
    }

    pub async fn execute(
        &self,
        db: &(impl ConnectionTrait + TransactionTrait),
    ) -> Result<companies::Model, Error> {
        Ok(company::reassign_contact(
            db,
            self.company.id,
            self.replacement.id,
            &self.replacement.email,
        )
        .await?)
    }
}

/// Resolves a request into a [`Resolution`] without writing anything.
pub async fn resolve(
    db: &impl ConnectionTrait,
    request: &ReassignmentRequest,
) -> Result<Resolution, Error> {
    let candidates = company::find_by_name_fragment(db, &request.name_fragment).await?;
    if candidates.is_empty() {
        return Ok(Resolution::CompanyNotFound);
    }
    debug!(
        "{} candidate(s) for name fragment '{}'",
        candidates.len(),
        request.name_fragment
    );

    let Some(replacement) = user::find_by_email(db, &request.new_contact_email).await? else {
        return Ok(Resolution::ReplacementMissing { candidates });
    };

    let company = match request.company_id {
        Some(id) => {
            let Some(selected) = candidates.iter().find(|company| company.id == id).cloned()
            else {
                warn!(
                    "Company {id} is not among the matches for '{}'",
                    request.name_fragment
                );
                return Ok(Resolution::CompanyNotFound);
            };
            selected
        }
        None => {
            if candidates.len() > 1 {
                return Ok(Resolution::Ambiguous { candidates });
            }
            match candidates.into_iter().next() {
                Some(only) => only,
                None => return Ok(Resolution::CompanyNotFound),
            }
        }
    };

    Ok(Resolution::Ready(ReassignmentPlan {
        company,
        replacement,
    }))
}

#[cfg(test)]
mod role_tests {
    use super::*;
    use entity_api::status::Status;

    fn plan_with_role(role: Role) -> ReassignmentPlan {
        let now = chrono::Utc::now();
        ReassignmentPlan {
            company: companies::Model {
                id: Id::new_v4(),
                user_id: None,
                name_cn: None,
                name_en: Some("POL Group USA".to_owned()),
                industry_primary: None,
                location_headquarters: None,
                description: None,
                stage: None,
                contact_name: None,
                contact_email: Some("41912912@qq.com".to_owned()),
                created_at: now.into(),
                updated_at: now.into(),
            },
            replacement: users::Model {
                id: Id::new_v4(),
                email: "leo@polgroupusa.com".to_owned(),
                name: Some("Leo".to_owned()),
                role,
                status: Status::Active,
                created_at: now.into(),
                updated_at: now.into(),
            },
        }
    }

    #[test]
    fn company_role_is_not_a_mismatch() {
        assert!(!plan_with_role(Role::Company).role_mismatch());
    }

    #[test]
    fn any_other_role_is_flagged() {
        assert!(plan_with_role(Role::Viewer).role_mismatch());
        assert!(plan_with_role(Role::Admin).role_mismatch());
        assert!(plan_with_role(Role::Investor).role_mismatch());
    }
}
