//! Document store for portfolios: insert once, fetch by exact id.

use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{Portfolio, PortfolioRow};

/// Storage backend for portfolios. No updates, deletes or secondary lookups.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn insert(&self, portfolio: &Portfolio) -> Result<(), AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Portfolio>, AppError>;
}

/// PostgreSQL-backed store. List fields live in JSONB columns.
pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn insert(&self, portfolio: &Portfolio) -> Result<(), AppError> {
        let data = &portfolio.data;
        sqlx::query(
            r#"
            INSERT INTO portfolios
                (id, name, title, email, phone, about,
                 education, skills, projects, experience,
                 selected_template, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(portfolio.id)
        .bind(&data.name)
        .bind(&data.title)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.about)
        .bind(Json(&data.education))
        .bind(Json(&data.skills))
        .bind(Json(&data.projects))
        .bind(Json(&data.experience))
        .bind(&portfolio.selected_template)
        .bind(portfolio.created_at)
        .bind(portfolio.updated_at)
        .execute(&self.pool)
        .await?;

        debug!("Inserted portfolio {} into PostgreSQL", portfolio.id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Portfolio>, AppError> {
        let row = sqlx::query_as::<_, PortfolioRow>("SELECT * FROM portfolios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Portfolio::from))
    }
}

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct InMemoryPortfolioStore {
    portfolios: RwLock<HashMap<Uuid, Portfolio>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn insert(&self, portfolio: &Portfolio) -> Result<(), AppError> {
        let mut portfolios = self.portfolios.write().await;
        if portfolios.contains_key(&portfolio.id) {
            return Err(AppError::Internal(anyhow!(
                "Portfolio {} already exists",
                portfolio.id
            )));
        }
        portfolios.insert(portfolio.id, portfolio.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Portfolio>, AppError> {
        Ok(self.portfolios.read().await.get(&id).cloned())
    }
}
