//! Initial database migration.
//!
//! Creates the analytic accounting tables Margin reads: analytic accounts,
//! projects, expenses, account moves, and analytic lines.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ANALYTIC ACCOUNTING
        // ============================================================
        db.execute_unprepared(ANALYTIC_ACCOUNTS_SQL).await?;
        db.execute_unprepared(PROJECTS_SQL).await?;

        // ============================================================
        // PART 3: EXPENSES & JOURNAL
        // ============================================================
        db.execute_unprepared(EXPENSES_SQL).await?;
        db.execute_unprepared(ACCOUNT_MOVES_SQL).await?;
        db.execute_unprepared(ANALYTIC_LINES_SQL).await?;

        // ============================================================
        // PART 4: INDEXES
        // ============================================================
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Expense lifecycle states
CREATE TYPE expense_state AS ENUM (
    'draft',
    'submitted',
    'approved',
    'done',
    'refused'
);
";

const ANALYTIC_ACCOUNTS_SQL: &str = r"
CREATE TABLE analytic_accounts (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL,
    code VARCHAR(64) NOT NULL,
    name VARCHAR(255) NOT NULL,
    active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (organization_id, code)
);
";

const PROJECTS_SQL: &str = r"
CREATE TABLE projects (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    analytic_account_id UUID REFERENCES analytic_accounts(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    analytic_account_id UUID REFERENCES analytic_accounts(id),
    untaxed_amount NUMERIC(18, 4) NOT NULL DEFAULT 0,
    state expense_state NOT NULL DEFAULT 'draft',
    is_refused BOOLEAN NOT NULL DEFAULT FALSE,
    expense_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const ACCOUNT_MOVES_SQL: &str = r"
CREATE TABLE account_moves (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL,
    reference VARCHAR(64) NOT NULL,
    expense_id UUID REFERENCES expenses(id),
    move_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const ANALYTIC_LINES_SQL: &str = r"
CREATE TABLE analytic_lines (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL,
    analytic_account_id UUID NOT NULL REFERENCES analytic_accounts(id),
    move_id UUID REFERENCES account_moves(id),
    name VARCHAR(255) NOT NULL,
    amount NUMERIC(18, 4) NOT NULL DEFAULT 0,
    line_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_projects_org ON projects(organization_id);
CREATE INDEX idx_projects_analytic ON projects(analytic_account_id);
CREATE INDEX idx_expenses_analytic ON expenses(analytic_account_id);
CREATE INDEX idx_expenses_analytic_state ON expenses(analytic_account_id, state)
    WHERE is_refused = FALSE;
CREATE INDEX idx_account_moves_expense ON account_moves(expense_id)
    WHERE expense_id IS NOT NULL;
CREATE INDEX idx_analytic_lines_account ON analytic_lines(analytic_account_id);
CREATE INDEX idx_analytic_lines_move ON analytic_lines(move_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS analytic_lines;
DROP TABLE IF EXISTS account_moves;
DROP TABLE IF EXISTS expenses;
DROP TABLE IF EXISTS projects;
DROP TABLE IF EXISTS analytic_accounts;
DROP TYPE IF EXISTS expense_state;
";
