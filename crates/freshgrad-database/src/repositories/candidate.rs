//! Candidate repository implementation.
//!
//! Candidates own three child collections (enrollments, course results,
//! notes) stored in their own tables with `ON DELETE CASCADE`. Reads
//! populate the children after the row fetch; list reads batch-load the
//! children for all candidates in three queries.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use freshgrad_core::error::{AppError, ErrorKind};
use freshgrad_core::result::AppResult;
use freshgrad_entity::candidate::{Candidate, CourseResult, Enrollment, Note};

/// Repository for candidate CRUD and child-collection operations.
#[derive(Debug, Clone)]
pub struct CandidateRepository {
    pool: PgPool,
}

/// Child row joined with its owning candidate id, for batch grouping.
#[derive(Debug, FromRow)]
struct ChildRow<T>
where
    T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    candidate_id: String,
    #[sqlx(flatten)]
    child: T,
}

impl CandidateRepository {
    /// Create a new candidate repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new candidate and its child collections, returning the
    /// fully materialized entity.
    pub async fn create(&self, candidate: &Candidate) -> AppResult<Candidate> {
        let mut created = sqlx::query_as::<_, Candidate>(
            "INSERT INTO candidates \
             (id, name, email, mobile, national_id, emirate, subject, gpa, track_id, status, sponsor, extra) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.mobile)
        .bind(&candidate.national_id)
        .bind(&candidate.emirate)
        .bind(&candidate.subject)
        .bind(candidate.gpa)
        .bind(candidate.track_id)
        .bind(candidate.status)
        .bind(candidate.sponsor)
        .bind(&candidate.extra)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create candidate", e))?;

        self.replace_enrollments(&created.id, &candidate.enrollments)
            .await?;
        self.replace_results(&created.id, &candidate.course_results)
            .await?;
        self.replace_notes(&created.id, &candidate.notes).await?;

        created.enrollments = self.load_enrollments(&created.id).await?;
        created.course_results = self.load_results(&created.id).await?;
        created.notes = self.load_notes(&created.id).await?;
        Ok(created)
    }

    /// List all candidates, newest first, children included.
    pub async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        let mut candidates = sqlx::query_as::<_, Candidate>(
            "SELECT * FROM candidates ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list candidates", e))?;

        if candidates.is_empty() {
            return Ok(candidates);
        }

        let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();

        let mut enrollments = self.batch_load::<Enrollment>(
            "SELECT candidate_id, id, course_code, start_date, end_date, status, mentor_id, \
                    internship_school, internship_emirate, position \
             FROM enrollments WHERE candidate_id = ANY($1) ORDER BY position",
            &ids,
        )
        .await?;
        let mut results = self.batch_load::<CourseResult>(
            "SELECT candidate_id, id, course_code, score, passed \
             FROM course_results WHERE candidate_id = ANY($1) ORDER BY course_code",
            &ids,
        )
        .await?;
        let mut notes = self.batch_load::<Note>(
            "SELECT candidate_id, id, text, author, role, created_at \
             FROM candidate_notes WHERE candidate_id = ANY($1) ORDER BY created_at",
            &ids,
        )
        .await?;

        for candidate in &mut candidates {
            candidate.enrollments = enrollments.remove(&candidate.id).unwrap_or_default();
            candidate.course_results = results.remove(&candidate.id).unwrap_or_default();
            candidate.notes = notes.remove(&candidate.id).unwrap_or_default();
        }
        Ok(candidates)
    }

    /// Find one candidate by id, children included.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find candidate", e)
            })?;

        let Some(mut candidate) = candidate else {
            return Ok(None);
        };

        candidate.enrollments = self.load_enrollments(id).await?;
        candidate.course_results = self.load_results(id).await?;
        candidate.notes = self.load_notes(id).await?;
        Ok(Some(candidate))
    }

    /// Overwrite a candidate's row fields (children are handled by the
    /// `replace_*` methods).
    pub async fn update_row(&self, candidate: &Candidate) -> AppResult<Candidate> {
        sqlx::query_as::<_, Candidate>(
            "UPDATE candidates SET name = $2, email = $3, mobile = $4, national_id = $5, \
                                   emirate = $6, subject = $7, gpa = $8, track_id = $9, \
                                   status = $10, sponsor = $11, extra = $12, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(&candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.mobile)
        .bind(&candidate.national_id)
        .bind(&candidate.emirate)
        .bind(&candidate.subject)
        .bind(candidate.gpa)
        .bind(candidate.track_id)
        .bind(candidate.status)
        .bind(candidate.sponsor)
        .bind(&candidate.extra)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update candidate", e))?
        .ok_or_else(|| AppError::not_found(format!("Candidate '{}' not found", candidate.id)))
    }

    /// Replace the candidate's enrollment list wholesale.
    pub async fn replace_enrollments(
        &self,
        candidate_id: &str,
        enrollments: &[Enrollment],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM enrollments WHERE candidate_id = $1")
            .bind(candidate_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear enrollments", e)
            })?;

        for (position, enrollment) in enrollments.iter().enumerate() {
            let id = if enrollment.id.is_nil() {
                Uuid::new_v4()
            } else {
                enrollment.id
            };
            sqlx::query(
                "INSERT INTO enrollments \
                 (id, candidate_id, course_code, start_date, end_date, status, mentor_id, \
                  internship_school, internship_emirate, position) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
            )
            .bind(id)
            .bind(candidate_id)
            .bind(&enrollment.course_code)
            .bind(enrollment.start_date)
            .bind(enrollment.end_date)
            .bind(&enrollment.status)
            .bind(&enrollment.mentor_id)
            .bind(&enrollment.internship_school)
            .bind(&enrollment.internship_emirate)
            .bind(position as i32)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert enrollment", e)
            })?;
        }
        Ok(())
    }

    /// Replace the candidate's course results wholesale.
    pub async fn replace_results(
        &self,
        candidate_id: &str,
        results: &[CourseResult],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM course_results WHERE candidate_id = $1")
            .bind(candidate_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear course results", e)
            })?;

        for result in results {
            let id = if result.id.is_nil() {
                Uuid::new_v4()
            } else {
                result.id
            };
            sqlx::query(
                "INSERT INTO course_results (id, candidate_id, course_code, score, passed) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(candidate_id)
            .bind(&result.course_code)
            .bind(result.score)
            .bind(result.passed)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert course result", e)
            })?;
        }
        Ok(())
    }

    /// Replace the candidate's notes thread wholesale.
    pub async fn replace_notes(&self, candidate_id: &str, notes: &[Note]) -> AppResult<()> {
        sqlx::query("DELETE FROM candidate_notes WHERE candidate_id = $1")
            .bind(candidate_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear notes", e))?;

        for note in notes {
            let id = if note.id.is_nil() {
                Uuid::new_v4()
            } else {
                note.id
            };
            sqlx::query(
                "INSERT INTO candidate_notes (id, candidate_id, text, author, role, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(id)
            .bind(candidate_id)
            .bind(&note.text)
            .bind(&note.author)
            .bind(&note.role)
            .bind(note.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert note", e))?;
        }
        Ok(())
    }

    /// Hard-delete a candidate; enrollments, results, notes, and
    /// corrections cascade.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete candidate", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn load_enrollments(&self, candidate_id: &str) -> AppResult<Vec<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT id, course_code, start_date, end_date, status, mentor_id, \
                    internship_school, internship_emirate, position \
             FROM enrollments WHERE candidate_id = $1 ORDER BY position",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load enrollments", e))
    }

    async fn load_results(&self, candidate_id: &str) -> AppResult<Vec<CourseResult>> {
        sqlx::query_as::<_, CourseResult>(
            "SELECT id, course_code, score, passed \
             FROM course_results WHERE candidate_id = $1 ORDER BY course_code",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load course results", e))
    }

    async fn load_notes(&self, candidate_id: &str) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT id, text, author, role, created_at \
             FROM candidate_notes WHERE candidate_id = $1 ORDER BY created_at",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load notes", e))
    }

    async fn batch_load<T>(&self, query: &str, ids: &[String]) -> AppResult<HashMap<String, Vec<T>>>
    where
        T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        let rows = sqlx::query_as::<_, ChildRow<T>>(query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to batch-load children", e)
            })?;

        let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
        for row in rows {
            grouped.entry(row.candidate_id).or_default().push(row.child);
        }
        Ok(grouped)
    }
}
