//! Database seeder for Margin development and testing.
//!
//! Seeds a test organization's analytic accounts, projects, expenses,
//! journal moves, and analytic lines for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use margin_db::entities::{
    account_moves, analytic_accounts, analytic_lines, expenses, projects,
    sea_orm_active_enums::ExpenseState,
};
use margin_shared::{JwtConfig, JwtService};

/// Test organization ID (consistent for all seeds)
const TEST_ORG_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Analytic account behind the seeded project
const TEST_ANALYTIC_ID: &str = "00000000-0000-0000-0000-000000000010";
/// Seeded project with expenses
const TEST_PROJECT_ID: &str = "00000000-0000-0000-0000-000000000020";
/// Seeded project without an analytic account
const BARE_PROJECT_ID: &str = "00000000-0000-0000-0000-000000000021";
/// Journal move generated from the approved expense
const EXPENSE_MOVE_ID: &str = "00000000-0000-0000-0000-000000000030";
/// Journal move unrelated to any expense
const REVENUE_MOVE_ID: &str = "00000000-0000-0000-0000-000000000031";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = margin_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding analytic account...");
    seed_analytic_account(&db).await;

    println!("Seeding projects...");
    seed_projects(&db).await;

    println!("Seeding expenses...");
    seed_expenses(&db).await;

    println!("Seeding journal moves...");
    seed_account_moves(&db).await;

    println!("Seeding analytic lines...");
    seed_analytic_lines(&db).await;

    print_dev_token();

    println!("Seeding complete!");
}

/// Prints a bearer token for exercising the API against the seeded data.
fn print_dev_token() {
    let secret = std::env::var("MARGIN__JWT__SECRET")
        .unwrap_or_else(|_| "change-me-in-production".to_string());
    let service = JwtService::new(JwtConfig {
        secret,
        ..JwtConfig::default()
    });

    match service.generate_access_token(Uuid::new_v4(), test_org_id(), "admin") {
        Ok(token) => println!("Dev bearer token (admin):\n  {token}"),
        Err(e) => eprintln!("Failed to generate dev token: {e}"),
    }
}

fn test_org_id() -> Uuid {
    Uuid::parse_str(TEST_ORG_ID).unwrap()
}

fn test_analytic_id() -> Uuid {
    Uuid::parse_str(TEST_ANALYTIC_ID).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
}

/// Seeds the analytic account the test project bills against.
async fn seed_analytic_account(db: &DatabaseConnection) {
    if analytic_accounts::Entity::find_by_id(test_analytic_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Analytic account already exists, skipping...");
        return;
    }

    let account = analytic_accounts::ActiveModel {
        id: Set(test_analytic_id()),
        organization_id: Set(test_org_id()),
        code: Set("AA-ROLLOUT".to_string()),
        name: Set("Platform Rollout".to_string()),
        active: Set(true),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = account.insert(db).await {
        eprintln!("Failed to insert analytic account: {e}");
    } else {
        println!("  Created analytic account: Platform Rollout");
    }
}

/// Seeds one project on the analytic account and one bare project.
async fn seed_projects(db: &DatabaseConnection) {
    let rows = [
        (TEST_PROJECT_ID, "Platform Rollout", Some(test_analytic_id())),
        (BARE_PROJECT_ID, "Internal Ops", None),
    ];

    for (id, name, analytic) in rows {
        let project_id = Uuid::parse_str(id).unwrap();
        if projects::Entity::find_by_id(project_id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Project {name} already exists, skipping...");
            continue;
        }

        let project = projects::ActiveModel {
            id: Set(project_id),
            organization_id: Set(test_org_id()),
            name: Set(name.to_string()),
            analytic_account_id: Set(analytic),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = project.insert(db).await {
            eprintln!("Failed to insert project {name}: {e}");
        } else {
            println!("  Created project: {name}");
        }
    }
}

/// Seeds expenses across the lifecycle: approved and done expenses count
/// toward profitability, the refused and draft ones only toward the badge.
async fn seed_expenses(db: &DatabaseConnection) {
    if expenses::Entity::find()
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Expenses already exist, skipping...");
        return;
    }

    let rows: [(&str, Decimal, ExpenseState, bool, u32); 4] = [
        ("Conference travel", Decimal::new(10000, 2), ExpenseState::Approved, false, 3),
        ("Team dinner", Decimal::new(5000, 2), ExpenseState::Refused, true, 5),
        ("Cloud credits", Decimal::new(3000, 2), ExpenseState::Done, false, 8),
        ("Office supplies", Decimal::new(1500, 2), ExpenseState::Draft, false, 12),
    ];

    for (name, amount, state, is_refused, d) in rows {
        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(test_org_id()),
            name: Set(name.to_string()),
            analytic_account_id: Set(Some(test_analytic_id())),
            untaxed_amount: Set(amount),
            state: Set(state),
            is_refused: Set(is_refused),
            expense_date: Set(day(d)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = expense.insert(db).await {
            eprintln!("Failed to insert expense {name}: {e}");
        } else {
            println!("  Created expense: {name}");
        }
    }
}

/// Seeds one expense-generated move and one plain revenue move.
async fn seed_account_moves(db: &DatabaseConnection) {
    let expense_id = expenses::Entity::find()
        .one(db)
        .await
        .ok()
        .flatten()
        .map(|e| e.id);

    let rows = [
        (EXPENSE_MOVE_ID, "EXP/2026/0001", expense_id, 3),
        (REVENUE_MOVE_ID, "INV/2026/0042", None, 10),
    ];

    for (id, reference, expense, d) in rows {
        let move_id = Uuid::parse_str(id).unwrap();
        if account_moves::Entity::find_by_id(move_id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Move {reference} already exists, skipping...");
            continue;
        }

        let journal_move = account_moves::ActiveModel {
            id: Set(move_id),
            organization_id: Set(test_org_id()),
            reference: Set(reference.to_string()),
            expense_id: Set(expense),
            move_date: Set(day(d)),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = journal_move.insert(db).await {
            eprintln!("Failed to insert move {reference}: {e}");
        } else {
            println!("  Created move: {reference}");
        }
    }
}

/// Seeds analytic lines: invoice revenue, a standalone cost, and an
/// expense-move line the profitability base must exclude.
async fn seed_analytic_lines(db: &DatabaseConnection) {
    if analytic_lines::Entity::find()
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Analytic lines already exist, skipping...");
        return;
    }

    let rows: [(&str, Decimal, Option<&str>, u32); 3] = [
        ("Invoice 42", Decimal::new(50000, 2), Some(REVENUE_MOVE_ID), 10),
        ("Contractor fees", Decimal::new(-12000, 2), None, 15),
        ("Expense reimbursement", Decimal::new(-10000, 2), Some(EXPENSE_MOVE_ID), 3),
    ];

    for (name, amount, move_ref, d) in rows {
        let line = analytic_lines::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(test_org_id()),
            analytic_account_id: Set(test_analytic_id()),
            move_id: Set(move_ref.map(|m| Uuid::parse_str(m).unwrap())),
            name: Set(name.to_string()),
            amount: Set(amount),
            line_date: Set(day(d)),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = line.insert(db).await {
            eprintln!("Failed to insert analytic line {name}: {e}");
        } else {
            println!("  Created analytic line: {name}");
        }
    }
}
