//! Mentor registry operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use freshgrad_core::error::AppError;
use freshgrad_core::result::AppResult;
use freshgrad_core::types::{Patch, id};
use freshgrad_database::repositories::mentor::MentorRepository;
use freshgrad_entity::mentor::Mentor;

/// Fields accepted when registering a mentor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorInput {
    /// Full name (required).
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,
    /// Mentoring subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// School the mentor teaches at.
    #[serde(default)]
    pub school: Option<String>,
    /// Emirate of the school.
    #[serde(default)]
    pub emirate: Option<String>,
}

/// Fields accepted when updating a mentor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentorInput {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email; null clears.
    #[serde(default)]
    pub email: Patch<String>,
    /// Mobile; null clears.
    #[serde(default)]
    pub mobile: Patch<String>,
    /// Subject; null clears.
    #[serde(default)]
    pub subject: Patch<String>,
    /// School; null clears.
    #[serde(default)]
    pub school: Patch<String>,
    /// Emirate; null clears.
    #[serde(default)]
    pub emirate: Patch<String>,
}

/// Handles the mentor registry.
#[derive(Clone)]
pub struct MentorService {
    mentor_repo: Arc<MentorRepository>,
}

impl MentorService {
    /// Creates a new mentor service.
    pub fn new(mentor_repo: Arc<MentorRepository>) -> Self {
        Self { mentor_repo }
    }

    /// Register a mentor.
    pub async fn create(&self, input: CreateMentorInput) -> AppResult<Mentor> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Mentor name is required"));
        }

        let mentor = Mentor {
            id: id::prefixed_id(id::MENTOR_PREFIX),
            name: input.name,
            email: input.email,
            mobile: input.mobile,
            subject: input.subject,
            school: input.school,
            emirate: input.emirate,
            created_at: chrono::Utc::now(),
        };

        let created = self.mentor_repo.create(&mentor).await?;
        info!(id = %created.id, "Mentor registered");
        Ok(created)
    }

    /// List all mentors, alphabetical by name.
    pub async fn list(&self) -> AppResult<Vec<Mentor>> {
        self.mentor_repo.find_all().await
    }

    /// Apply a partial update.
    pub async fn update(&self, id: &str, input: UpdateMentorInput) -> AppResult<Mentor> {
        let mut mentor = self
            .mentor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Mentor '{id}' not found")))?;

        if let Some(name) = input.name {
            mentor.name = name;
        }
        input.email.apply_to(&mut mentor.email);
        input.mobile.apply_to(&mut mentor.mobile);
        input.subject.apply_to(&mut mentor.subject);
        input.school.apply_to(&mut mentor.school);
        input.emirate.apply_to(&mut mentor.emirate);

        self.mentor_repo.update(&mentor).await
    }

    /// Hard-delete a mentor.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.mentor_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Mentor '{id}' not found")));
        }
        info!(id, "Mentor deleted");
        Ok(())
    }
}
