//! Project repository for expense-count and lookup queries.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::entities::{expenses, projects};

/// Error types for project operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// Project not found.
    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Project repository for project-scoped queries.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: DatabaseConnection,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a project by id within an organization.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no such project exists, or a database
    /// error if the query fails.
    pub async fn find_by_id(
        &self,
        organization_id: Uuid,
        project_id: Uuid,
    ) -> Result<projects::Model, ProjectError> {
        projects::Entity::find_by_id(project_id)
            .filter(projects::Column::OrganizationId.eq(organization_id))
            .one(&self.db)
            .await?
            .ok_or(ProjectError::ProjectNotFound(project_id))
    }

    /// Computes the expense count for each requested project.
    ///
    /// Projects without an analytic account count 0 and never reach the
    /// database. For the rest, one grouped count query covers all analytic
    /// accounts at once; projects absent from the grouped result (account
    /// with no linked expenses) also get 0. Counts are state-agnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn expense_counts(
        &self,
        organization_id: Uuid,
        project_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, ProjectError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let pairs: Vec<(Uuid, Option<Uuid>)> = projects::Entity::find()
            .filter(projects::Column::OrganizationId.eq(organization_id))
            .filter(projects::Column::Id.is_in(project_ids.to_vec()))
            .select_only()
            .column(projects::Column::Id)
            .column(projects::Column::AnalyticAccountId)
            .into_tuple()
            .all(&self.db)
            .await?;

        let analytic_ids: Vec<Uuid> = pairs.iter().filter_map(|(_, analytic)| *analytic).collect();

        let grouped = if analytic_ids.is_empty() {
            HashMap::new()
        } else {
            let rows: Vec<(Option<Uuid>, i64)> = expenses::Entity::find()
                .filter(expenses::Column::AnalyticAccountId.is_in(analytic_ids))
                .select_only()
                .column(expenses::Column::AnalyticAccountId)
                .column_as(expenses::Column::Id.count(), "count")
                .group_by(expenses::Column::AnalyticAccountId)
                .into_tuple()
                .all(&self.db)
                .await?;

            rows.into_iter()
                .filter_map(|(analytic, count)| {
                    analytic.map(|id| (id, u64::try_from(count).unwrap_or_default()))
                })
                .collect()
        };

        Ok(distribute_expense_counts(&pairs, &grouped))
    }
}

/// Distributes grouped per-analytic-account counts back onto projects.
///
/// Missing analytic account or missing group row both mean 0.
#[must_use]
pub fn distribute_expense_counts(
    projects: &[(Uuid, Option<Uuid>)],
    counts_by_analytic: &HashMap<Uuid, u64>,
) -> HashMap<Uuid, u64> {
    projects
        .iter()
        .map(|(project_id, analytic)| {
            let count = analytic
                .and_then(|id| counts_by_analytic.get(&id).copied())
                .unwrap_or(0);
            (*project_id, count)
        })
        .collect()
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
