//! Correction request/response workflow.
//!
//! A correction is raised by one role against a candidate, addressed to
//! another role. `Pending → {Resolved, Rejected, Responded}`; `Responded`
//! stays open. Transitions out of a terminal state are refused. Each
//! workflow step emits a notification to the counterpart and an audit
//! entry, best-effort.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::types::Json;
use tracing::{info, warn};
use uuid::Uuid;

use freshgrad_core::error::AppError;
use freshgrad_core::result::AppResult;
use freshgrad_database::repositories::audit::AuditRepository;
use freshgrad_database::repositories::candidate::CandidateRepository;
use freshgrad_database::repositories::correction::CorrectionRepository;
use freshgrad_database::repositories::notification::NotificationRepository;
use freshgrad_entity::audit::AuditEntry;
use freshgrad_entity::correction::{Correction, CorrectionResponse, CorrectionStatus};
use freshgrad_entity::notification::Notification;
use freshgrad_entity::user::UserRole;

/// Fields accepted when raising a correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCorrectionInput {
    /// Dispute text (required).
    pub text: String,
    /// Originating user (email or name).
    pub from_user: String,
    /// Role of the originator.
    pub from_role: UserRole,
    /// Role expected to act.
    pub target_role: UserRole,
}

/// Fields accepted when responding to a correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondInput {
    /// Responding user (email or name).
    pub author: String,
    /// Role of the responder.
    pub role: UserRole,
    /// Response text.
    pub text: String,
}

/// Handles the correction workflow and the events it emits.
#[derive(Clone)]
pub struct CorrectionService {
    correction_repo: Arc<CorrectionRepository>,
    candidate_repo: Arc<CandidateRepository>,
    notification_repo: Arc<NotificationRepository>,
    audit_repo: Arc<AuditRepository>,
}

impl CorrectionService {
    /// Creates a new correction service.
    pub fn new(
        correction_repo: Arc<CorrectionRepository>,
        candidate_repo: Arc<CandidateRepository>,
        notification_repo: Arc<NotificationRepository>,
        audit_repo: Arc<AuditRepository>,
    ) -> Self {
        Self {
            correction_repo,
            candidate_repo,
            notification_repo,
            audit_repo,
        }
    }

    /// Raise a correction against a candidate.
    pub async fn create(
        &self,
        candidate_id: &str,
        input: CreateCorrectionInput,
    ) -> AppResult<Correction> {
        if input.text.trim().is_empty() {
            return Err(AppError::validation("Correction text is required"));
        }
        if self
            .candidate_repo
            .find_by_id(candidate_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(format!(
                "Candidate '{candidate_id}' not found"
            )));
        }

        let correction = Correction {
            id: Uuid::new_v4(),
            candidate_id: candidate_id.to_string(),
            text: input.text,
            from_user: input.from_user,
            from_role: input.from_role,
            target_role: input.target_role,
            status: CorrectionStatus::Pending,
            reject_reason: None,
            response: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let created = self.correction_repo.create(&correction).await?;
        info!(id = %created.id, candidate_id, target = %created.target_role, "Correction raised");

        self.notify(
            None,
            Some(created.target_role),
            "correction",
            "Correction requested",
            &format!(
                "{} ({}) requested a correction on candidate {}",
                created.from_user, created.from_role, created.candidate_id
            ),
            json!({ "candidateId": created.candidate_id, "correctionId": created.id }),
        )
        .await;
        self.audit(
            "correction.raised",
            json!({ "correctionId": created.id, "candidateId": created.candidate_id }),
        )
        .await;
        Ok(created)
    }

    /// List all corrections, newest first.
    pub async fn list(&self) -> AppResult<Vec<Correction>> {
        self.correction_repo.find_all().await
    }

    /// List corrections for one candidate, newest first.
    pub async fn list_for_candidate(&self, candidate_id: &str) -> AppResult<Vec<Correction>> {
        self.correction_repo.find_by_candidate(candidate_id).await
    }

    /// Close a correction as resolved.
    pub async fn resolve(&self, id: Uuid) -> AppResult<Correction> {
        let correction = self.transition(id, CorrectionStatus::Resolved, None, None).await?;
        self.notify_outcome(&correction, "Correction resolved").await;
        Ok(correction)
    }

    /// Close a correction as rejected; a reason is required.
    pub async fn reject(&self, id: Uuid, reason: &str) -> AppResult<Correction> {
        if reason.trim().is_empty() {
            return Err(AppError::validation("A reject reason is required"));
        }
        let correction = self
            .transition(id, CorrectionStatus::Rejected, Some(reason), None)
            .await?;
        self.notify_outcome(&correction, "Correction rejected").await;
        Ok(correction)
    }

    /// Attach a response without closing the correction.
    pub async fn respond(&self, id: Uuid, input: RespondInput) -> AppResult<Correction> {
        if input.text.trim().is_empty() {
            return Err(AppError::validation("Response text is required"));
        }
        let response = CorrectionResponse {
            author: input.author,
            role: input.role,
            text: input.text,
            timestamp: Utc::now(),
        };
        let correction = self
            .transition(id, CorrectionStatus::Responded, None, Some(&response))
            .await?;
        self.notify_outcome(&correction, "Correction response received")
            .await;
        Ok(correction)
    }

    async fn transition(
        &self,
        id: Uuid,
        next: CorrectionStatus,
        reject_reason: Option<&str>,
        response: Option<&CorrectionResponse>,
    ) -> AppResult<Correction> {
        let current = self
            .correction_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Correction '{id}' not found")))?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Cannot move correction from {} to {}",
                current.status, next
            )));
        }

        let updated = self
            .correction_repo
            .set_status(id, next, reject_reason, response)
            .await?;
        info!(id = %updated.id, status = %updated.status, "Correction transitioned");

        self.audit(
            "correction.transitioned",
            json!({ "correctionId": updated.id, "from": current.status, "to": updated.status }),
        )
        .await;
        Ok(updated)
    }

    /// Notify the originator about an outcome on their correction. The
    /// from_user field holds an email when the originator registered with
    /// one; the originating role is addressed as well.
    async fn notify_outcome(&self, correction: &Correction, title: &str) {
        self.notify(
            Some(correction.from_user.clone()),
            Some(correction.from_role),
            "correction",
            title,
            &format!(
                "Correction on candidate {} is now {}",
                correction.candidate_id, correction.status
            ),
            json!({ "candidateId": correction.candidate_id, "correctionId": correction.id }),
        )
        .await;
    }

    /// Best-effort notification append.
    async fn notify(
        &self,
        email: Option<String>,
        role: Option<UserRole>,
        kind: &str,
        title: &str,
        body: &str,
        target: Value,
    ) {
        let notification = Notification {
            id: Uuid::new_v4(),
            email,
            role,
            kind: kind.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            target: Json(target),
            read: false,
            created_at: Utc::now(),
        };
        if let Err(e) = self.notification_repo.create(&notification).await {
            warn!(kind, error = %e, "Failed to create notification");
        }
    }

    /// Best-effort audit append.
    async fn audit(&self, event_type: &str, payload: Value) {
        let entry = AuditEntry {
            id: Uuid::new_v4(),
            event_type: event_type.to_string(),
            payload: Json(payload),
            created_at: Utc::now(),
        };
        if let Err(e) = self.audit_repo.append(&entry).await {
            warn!(event_type, error = %e, "Failed to append audit entry");
        }
    }
}
