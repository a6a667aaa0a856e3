//! Portfolio repository implementation using SQLite
//!
//! A portfolio row, its thumbnail row, any newly named skills and the skill
//! links are written in one transaction. Deleting a portfolio cascades to
//! the thumbnail and the links; skills stay.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::{PortfolioFilter, PortfolioRepository};
use folio_domain::{
    FolioError, Page, PageRequest, Portfolio, PortfolioDraft, PortfolioId, PortfolioSkill,
    PortfolioSort, Result as DomainResult, Thumbnail,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use super::skill_repository::find_or_create_skill;
use super::thumbnail_repository::insert_thumbnail;
use super::{map_join_error, map_sql_error, timestamp_at, to_millis, to_sql_int};

const PORTFOLIO_COLUMNS: &str = "p.id, p.user_id, p.title, p.description, p.content, p.git_link,
        p.distribution_link, p.view_count, p.likes_count, p.created_at, p.updated_at,
        t.id, t.image_url";

/// SQLite-backed implementation of `PortfolioRepository`
pub struct SqlitePortfolioRepository {
    db: Arc<DbManager>,
}

impl SqlitePortfolioRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for SqlitePortfolioRepository {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<Portfolio>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Portfolio>> {
            let conn = db.get_connection()?;
            load_portfolio(&conn, id).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, draft: PortfolioDraft) -> DomainResult<Portfolio> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Portfolio> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;
            let now = to_millis(Utc::now());

            tx.execute(
                "INSERT INTO portfolios (user_id, title, description, content, git_link,
                        distribution_link, view_count, likes_count, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, 0, ?7, ?7)",
                params![
                    draft.owner_id,
                    draft.title,
                    draft.description,
                    draft.content,
                    draft.git_link,
                    draft.distribution_link,
                    now
                ],
            )
            .map_err(map_sql_error)?;
            let id = tx.last_insert_rowid();

            insert_thumbnail(&tx, id, &draft.thumbnail_url).map_err(map_sql_error)?;
            link_skills(&tx, id, &draft.skill_names).map_err(map_sql_error)?;

            let portfolio = load_portfolio(&tx, id)
                .map_err(map_sql_error)?
                .ok_or(FolioError::PortfolioNotFound(id))?;
            tx.commit().map_err(map_sql_error)?;

            debug!(portfolio_id = id, skills = portfolio.skills.len(), "portfolio row inserted");
            Ok(portfolio)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, portfolio: &Portfolio, skill_names: &[String]) -> DomainResult<Portfolio> {
        let db = Arc::clone(&self.db);
        let portfolio = portfolio.clone();
        let skill_names = skill_names.to_vec();

        task::spawn_blocking(move || -> DomainResult<Portfolio> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            let changed = tx
                .execute(
                    "UPDATE portfolios
                     SET title = ?1, description = ?2, content = ?3, git_link = ?4,
                         distribution_link = ?5, updated_at = ?6
                     WHERE id = ?7",
                    params![
                        portfolio.title,
                        portfolio.description,
                        portfolio.content,
                        portfolio.git_link,
                        portfolio.distribution_link,
                        to_millis(Utc::now()),
                        portfolio.id
                    ],
                )
                .map_err(map_sql_error)?;
            if changed == 0 {
                return Err(FolioError::PortfolioNotFound(portfolio.id));
            }

            tx.execute("DELETE FROM portfolio_skills WHERE portfolio_id = ?1", params![portfolio.id])
                .map_err(map_sql_error)?;
            link_skills(&tx, portfolio.id, &skill_names).map_err(map_sql_error)?;

            let updated = load_portfolio(&tx, portfolio.id)
                .map_err(map_sql_error)?
                .ok_or(FolioError::PortfolioNotFound(portfolio.id))?;
            tx.commit().map_err(map_sql_error)?;
            Ok(updated)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let removed = conn
                .execute("DELETE FROM portfolios WHERE id = ?1", params![id])
                .map_err(map_sql_error)?;
            Ok(removed > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn increment_views(&self, id: PortfolioId) -> DomainResult<Option<i64>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<i64>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "UPDATE portfolios
                 SET view_count = CASE WHEN view_count < ?2 THEN view_count + 1 ELSE view_count END
                 WHERE id = ?1
                 RETURNING view_count",
                params![id, i64::MAX],
                |row| row.get(0),
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn adjust_likes(&self, id: PortfolioId, delta: i64) -> DomainResult<Option<i64>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<i64>> {
            let conn = db.get_connection()?;
            // Clamped in SQL: the sum is computed against the live row.
            conn.query_row(
                "UPDATE portfolios
                 SET likes_count = CASE
                     WHEN ?2 > 0 AND likes_count > ?3 - ?2 THEN ?3
                     WHEN likes_count + ?2 < 0 THEN 0
                     ELSE likes_count + ?2
                 END
                 WHERE id = ?1
                 RETURNING likes_count",
                params![id, delta, i64::MAX],
                |row| row.get(0),
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_page(
        &self,
        filter: PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> DomainResult<Page<Portfolio>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Page<Portfolio>> {
            let conn = db.get_connection()?;
            let (clause, mut values) = filter_clause(&filter);

            let total: i64 = conn
                .query_row(
                    &format!("SELECT COUNT(*) FROM portfolios p {clause}"),
                    params_from_iter(values.iter()),
                    |row| row.get(0),
                )
                .map_err(map_sql_error)?;

            values.push(Value::Integer(i64::from(page.size)));
            values.push(Value::Integer(to_sql_int(page.offset())));

            let sql = format!(
                "SELECT {PORTFOLIO_COLUMNS}
                 FROM portfolios p
                 JOIN thumbnails t ON t.portfolio_id = p.id
                 {clause}
                 ORDER BY {order}, p.id DESC
                 LIMIT ? OFFSET ?",
                order = order_column(sort),
            );

            let mut stmt = conn.prepare(&sql).map_err(map_sql_error)?;
            let rows = stmt
                .query_map(params_from_iter(values.iter()), map_portfolio_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            let mut content = Vec::with_capacity(rows.len());
            for mut portfolio in rows {
                portfolio.skills = load_skills(&conn, portfolio.id).map_err(map_sql_error)?;
                content.push(portfolio);
            }

            Ok(Page::new(content, page, u64::try_from(total).unwrap_or_default()))
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// `WHERE` clause and positional values for a filter. Only bound
/// parameters carry user input.
fn filter_clause(filter: &PortfolioFilter) -> (&'static str, Vec<Value>) {
    match filter {
        PortfolioFilter::All => ("", Vec::new()),
        PortfolioFilter::Owner(user_id) => ("WHERE p.user_id = ?", vec![Value::Integer(*user_id)]),
        PortfolioFilter::AuthorName(name) => (
            "WHERE p.user_id IN (SELECT u.id FROM users u WHERE u.name = ?)",
            vec![Value::Text(name.clone())],
        ),
        PortfolioFilter::TitleContains(term) => {
            ("WHERE instr(p.title, ?) > 0", vec![Value::Text(term.clone())])
        }
        PortfolioFilter::Skill(skill_id) => (
            "WHERE EXISTS (SELECT 1 FROM portfolio_skills ps
                           WHERE ps.portfolio_id = p.id AND ps.skill_id = ?)",
            vec![Value::Integer(*skill_id)],
        ),
    }
}

const fn order_column(sort: PortfolioSort) -> &'static str {
    match sort {
        PortfolioSort::CreatedAt => "p.created_at DESC",
        PortfolioSort::Views => "p.view_count DESC",
        PortfolioSort::Likes => "p.likes_count DESC",
    }
}

/// Link each named skill in order, creating skills that do not exist yet.
fn link_skills(conn: &Connection, portfolio_id: PortfolioId, names: &[String]) -> rusqlite::Result<()> {
    for name in names {
        let skill = find_or_create_skill(conn, name)?;
        conn.prepare_cached("INSERT INTO portfolio_skills (portfolio_id, skill_id) VALUES (?1, ?2)")?
            .execute(params![portfolio_id, skill.id])?;
    }
    Ok(())
}

fn load_skills(conn: &Connection, portfolio_id: PortfolioId) -> rusqlite::Result<Vec<PortfolioSkill>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name
         FROM portfolio_skills ps
         JOIN skills s ON s.id = ps.skill_id
         WHERE ps.portfolio_id = ?1
         ORDER BY ps.id",
    )?;
    let skills: rusqlite::Result<Vec<_>> = stmt
        .query_map(params![portfolio_id], |row| {
            Ok(PortfolioSkill { skill_id: row.get(0)?, skill_name: row.get(1)? })
        })?
        .collect();
    skills
}

fn load_portfolio(conn: &Connection, id: PortfolioId) -> rusqlite::Result<Option<Portfolio>> {
    let portfolio = conn
        .query_row(
            &format!(
                "SELECT {PORTFOLIO_COLUMNS}
                 FROM portfolios p
                 JOIN thumbnails t ON t.portfolio_id = p.id
                 WHERE p.id = ?1"
            ),
            params![id],
            map_portfolio_row,
        )
        .optional()?;

    match portfolio {
        Some(mut portfolio) => {
            portfolio.skills = load_skills(conn, id)?;
            Ok(Some(portfolio))
        }
        None => Ok(None),
    }
}

/// Map a row selected with `PORTFOLIO_COLUMNS`; skills are loaded separately.
fn map_portfolio_row(row: &Row<'_>) -> rusqlite::Result<Portfolio> {
    let id: PortfolioId = row.get(0)?;
    Ok(Portfolio {
        id,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        git_link: row.get(5)?,
        distribution_link: row.get(6)?,
        view_count: row.get(7)?,
        likes_count: row.get(8)?,
        created_at: timestamp_at(row, 9)?,
        updated_at: timestamp_at(row, 10)?,
        skills: Vec::new(),
        thumbnail: Thumbnail { id: row.get(11)?, portfolio_id: id, image_url: row.get(12)? },
    })
}
