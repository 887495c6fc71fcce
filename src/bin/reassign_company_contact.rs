//! Reassigns a company's owning user and contact email to an existing
//! account, after showing the operator exactly what will change and asking
//! for confirmation. Every outcome maps to its own exit code so calling
//! automation can tell them apart.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use domain::company_contact::{self, ReassignmentRequest, Resolution};
use domain::{companies, roles::Role, users, Id};
use dotenvy::dotenv;
use log::{error, info, warn};
use service::config::Config;
use service::logging::Logger;

#[derive(Debug, Parser)]
#[command(
    name = "reassign_company_contact",
    about = "Hands a company record over to a different contact account"
)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Substring matched case-insensitively against both company names
    #[arg(long, env = "COMPANY_NAME_FRAGMENT")]
    name_fragment: String,

    /// Email of the existing user account that becomes the new contact
    #[arg(long, env = "NEW_CONTACT_EMAIL")]
    new_email: String,

    /// Company id to select when the name fragment matches more than one company
    #[arg(long, env = "COMPANY_ID")]
    company_id: Option<Id>,

    /// Apply the update without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    assume_yes: bool,
}

/// Workflow outcomes, one exit code each.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Outcome {
    Updated,
    DatabaseFault,
    CompanyNotFound,
    ReplacementMissing,
    Declined,
    Ambiguous,
    UpdateFailed,
}

impl Outcome {
    fn code(self) -> u8 {
        match self {
            Outcome::Updated => 0,
            Outcome::DatabaseFault => 1,
            Outcome::CompanyNotFound => 2,
            Outcome::ReplacementMissing => 3,
            Outcome::Declined => 4,
            Outcome::Ambiguous => 5,
            Outcome::UpdateFailed => 6,
        }
    }

    fn exit(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

#[derive(Debug, PartialEq)]
enum Answer {
    Yes,
    No,
    /// The input stream closed before an answer arrived.
    NonInteractive,
}

fn parse_answer(line: Option<&str>) -> Answer {
    match line {
        Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => Answer::Yes,
        Some(_) => Answer::No,
        None => Answer::NonInteractive,
    }
}

fn ask_confirmation() -> Answer {
    print!("Apply this change? (yes/no): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => parse_answer(None),
        Ok(_) => parse_answer(Some(&line)),
    }
}

fn display_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

fn display_id(value: Option<Id>) -> String {
    value
        .map(|id| id.to_string())
        .unwrap_or_else(|| "(none)".to_owned())
}

fn report_candidates(candidates: &[companies::Model]) {
    info!("Found {} matching company(ies):", candidates.len());
    for (index, company) in candidates.iter().enumerate() {
        info!(
            "{}. id: {}, name_cn: {}, name_en: {}, user_id: {}, contact_email: {}",
            index + 1,
            company.id,
            display_opt(&company.name_cn),
            display_opt(&company.name_en),
            display_id(company.user_id),
            display_opt(&company.contact_email),
        );
    }
}

fn report_replacement(replacement: &users::Model) {
    info!("Found replacement account:");
    info!("  id: {}", replacement.id);
    info!("  email: {}", replacement.email);
    info!("  name: {}", display_opt(&replacement.name));
    info!("  role: {}", replacement.role);
    info!("  status: {}", replacement.status);
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    Logger::init_logger(&cli.config);

    info!("Looking for companies matching '{}'", cli.name_fragment);
    info!("New contact email: {}", cli.new_email);

    let db = match service::init_database(&cli.config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            return Outcome::DatabaseFault.exit();
        }
    };

    let request = ReassignmentRequest {
        name_fragment: cli.name_fragment.clone(),
        new_contact_email: cli.new_email.clone(),
        company_id: cli.company_id,
    };

    let resolution = match company_contact::resolve(&db, &request).await {
        Ok(resolution) => resolution,
        Err(e) => {
            error!("Lookup failed: {e}");
            return Outcome::DatabaseFault.exit();
        }
    };

    let plan = match resolution {
        Resolution::CompanyNotFound => {
            info!("No company matches '{}'", cli.name_fragment);
            return Outcome::CompanyNotFound.exit();
        }
        Resolution::ReplacementMissing { candidates } => {
            report_candidates(&candidates);
            info!("No user account exists for {}", cli.new_email);
            info!("Create that account first, then re-run this tool");
            return Outcome::ReplacementMissing.exit();
        }
        Resolution::Ambiguous { candidates } => {
            report_candidates(&candidates);
            info!("More than one company matches; re-run with --company-id naming one of the candidates");
            return Outcome::Ambiguous.exit();
        }
        Resolution::Ready(plan) => plan,
    };

    report_replacement(&plan.replacement);
    if plan.role_mismatch() {
        warn!(
            "Account role is '{}', not '{}'; the update will proceed anyway",
            plan.replacement.role,
            Role::Company
        );
    }

    info!("About to update company {}:", plan.company.id);
    info!(
        "  name: {} / {}",
        display_opt(&plan.company.name_cn),
        display_opt(&plan.company.name_en),
    );
    info!(
        "  user_id: {} -> {}",
        display_id(plan.company.user_id),
        plan.replacement.id
    );
    info!(
        "  contact_email: {} -> {}",
        display_opt(&plan.company.contact_email),
        plan.replacement.email
    );

    if !cli.assume_yes {
        match ask_confirmation() {
            Answer::Yes => {}
            Answer::No => {
                info!("Update cancelled");
                return Outcome::Declined.exit();
            }
            Answer::NonInteractive => {
                info!("No interactive confirmation available; pass --yes to apply without a prompt");
                return Outcome::Declined.exit();
            }
        }
    }

    match plan.execute(&db).await {
        Ok(updated) => {
            info!("Update applied:");
            info!("  company id: {}", updated.id);
            info!("  user_id: {}", display_id(updated.user_id));
            info!("  contact_email: {}", display_opt(&updated.contact_email));
            Outcome::Updated.exit()
        }
        Err(e) => {
            error!("Update failed and was rolled back: {e}");
            Outcome::UpdateFailed.exit()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "reassign_company_contact",
            "--database-url",
            "postgres://localhost/app",
            "--name-fragment",
            "POL",
            "--new-email",
            "leo@polgroupusa.com",
        ]
    }

    #[test]
    fn only_an_explicit_yes_confirms() {
        assert_eq!(parse_answer(Some("yes\n")), Answer::Yes);
        assert_eq!(parse_answer(Some("  YES  ")), Answer::Yes);
        assert_eq!(parse_answer(Some("y")), Answer::No);
        assert_eq!(parse_answer(Some("no")), Answer::No);
        assert_eq!(parse_answer(Some("")), Answer::No);
        assert_eq!(parse_answer(None), Answer::NonInteractive);
    }

    #[test]
    fn outcome_codes_are_distinct() {
        let outcomes = [
            Outcome::Updated,
            Outcome::DatabaseFault,
            Outcome::CompanyNotFound,
            Outcome::ReplacementMissing,
            Outcome::Declined,
            Outcome::Ambiguous,
            Outcome::UpdateFailed,
        ];
        for (i, a) in outcomes.iter().enumerate() {
            for b in &outcomes[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
        assert_eq!(Outcome::Updated.code(), 0);
    }

    #[test]
    fn override_flag_accepts_both_spellings() {
        let mut long = base_args();
        long.push("--yes");
        let cli = Cli::try_parse_from(long).expect("parse failed");
        assert!(cli.assume_yes);

        let mut short = base_args();
        short.push("-y");
        let cli = Cli::try_parse_from(short).expect("parse failed");
        assert!(cli.assume_yes);

        let cli = Cli::try_parse_from(base_args()).expect("parse failed");
        assert!(!cli.assume_yes);
    }

    #[test]
    fn company_id_is_optional_and_parsed_as_uuid() {
        let id = "73edd9dd-b725-4a81-9cf7-38c2171e1069";
        let mut args = base_args();
        args.extend(["--company-id", id]);
        let cli = Cli::try_parse_from(args).expect("parse failed");
        assert_eq!(cli.company_id.map(|id| id.to_string()), Some(id.to_owned()));
    }
}
