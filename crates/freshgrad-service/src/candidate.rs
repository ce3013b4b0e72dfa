//! Candidate lifecycle operations.
//!
//! Creation substitutes documented defaults, preserves unmapped input
//! fields in the extension map, and generates the typed-prefix id. Updates
//! apply three-state patches and replace child collections wholesale when
//! provided. Status changes append an audit event; transitions themselves
//! are unconstrained at this layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use sqlx::types::Json;
use tracing::{info, warn};
use uuid::Uuid;

use freshgrad_core::error::AppError;
use freshgrad_core::result::AppResult;
use freshgrad_core::types::{Patch, id};
use freshgrad_database::repositories::audit::AuditRepository;
use freshgrad_database::repositories::candidate::CandidateRepository;
use freshgrad_entity::audit::AuditEntry;
use freshgrad_entity::candidate::{
    Candidate, CandidateStatus, CourseResult, Enrollment, Note, Sponsor, TrackId,
};

/// Server-assigned keys stripped from incoming bodies so an echoed GET
/// response can be sent back as an update without polluting the extension
/// map.
const SERVER_ASSIGNED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Collapse the flattened unknown-key map into the extension map.
///
/// An explicit top-level `extra` object (as emitted in responses) is
/// unwrapped, other unknown keys are merged over it, and server-assigned
/// keys are dropped. Returns `None` when the body carried no extension
/// content at all, so updates can tell "no extensions sent" apart from
/// "replace with this map".
fn extension_map(mut raw: Map<String, Value>) -> Option<Map<String, Value>> {
    for key in SERVER_ASSIGNED_KEYS {
        raw.remove(key);
    }
    let explicit = raw.remove("extra");
    if explicit.is_none() && raw.is_empty() {
        return None;
    }
    let mut map = match explicit {
        Some(Value::Object(inner)) => inner,
        _ => Map::new(),
    };
    map.extend(raw);
    Some(map)
}

/// Fields accepted when importing a candidate. Unknown fields are caught
/// by the flattened map and stored in the extension map; an explicit
/// `extra` object is accepted as the map itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateInput {
    /// Full name (required).
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,
    /// National id number.
    #[serde(default)]
    pub national_id: Option<String>,
    /// Emirate of residence.
    #[serde(default)]
    pub emirate: Option<String>,
    /// Teaching subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// Grade point average; defaults to 0.
    #[serde(default)]
    pub gpa: Option<f64>,
    /// Training track; defaults to t1.
    #[serde(default)]
    pub track_id: Option<TrackId>,
    /// Lifecycle status; defaults to Imported.
    #[serde(default)]
    pub status: Option<CandidateStatus>,
    /// Funding body.
    #[serde(default)]
    pub sponsor: Option<Sponsor>,
    /// Initial enrollment list.
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    /// Initial course results.
    #[serde(default)]
    pub course_results: Vec<CourseResult>,
    /// Initial notes thread.
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Everything else, preserved losslessly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields accepted when updating a candidate. Absent fields are left
/// untouched; explicit null clears nullable fields; child collections are
/// replaced wholesale when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateInput {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email; null clears.
    #[serde(default)]
    pub email: Patch<String>,
    /// Mobile number; null clears.
    #[serde(default)]
    pub mobile: Patch<String>,
    /// National id; null clears.
    #[serde(default)]
    pub national_id: Patch<String>,
    /// Emirate; null clears.
    #[serde(default)]
    pub emirate: Patch<String>,
    /// Subject; null clears.
    #[serde(default)]
    pub subject: Patch<String>,
    /// New grade point average.
    #[serde(default)]
    pub gpa: Option<f64>,
    /// New training track.
    #[serde(default)]
    pub track_id: Option<TrackId>,
    /// New lifecycle status.
    #[serde(default)]
    pub status: Option<CandidateStatus>,
    /// Sponsor; null clears.
    #[serde(default)]
    pub sponsor: Patch<Sponsor>,
    /// Replacement enrollment list.
    #[serde(default)]
    pub enrollments: Option<Vec<Enrollment>>,
    /// Replacement course results.
    #[serde(default)]
    pub course_results: Option<Vec<CourseResult>>,
    /// Replacement notes thread.
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
    /// Extension fields, either flattened at the top level or as an
    /// explicit `extra` object; replaces the stored map wholesale when
    /// any are present.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Handles candidate CRUD and the audit events it emits.
#[derive(Clone)]
pub struct CandidateService {
    candidate_repo: Arc<CandidateRepository>,
    audit_repo: Arc<AuditRepository>,
}

impl CandidateService {
    /// Creates a new candidate service.
    pub fn new(candidate_repo: Arc<CandidateRepository>, audit_repo: Arc<AuditRepository>) -> Self {
        Self {
            candidate_repo,
            audit_repo,
        }
    }

    /// Import a candidate, substituting defaults for unspecified fields.
    pub async fn create(&self, input: CreateCandidateInput) -> AppResult<Candidate> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Candidate name is required"));
        }

        let candidate = Candidate {
            id: id::prefixed_id(id::CANDIDATE_PREFIX),
            name: input.name,
            email: input.email,
            mobile: input.mobile,
            national_id: input.national_id,
            emirate: input.emirate,
            subject: input.subject,
            gpa: input.gpa.unwrap_or(0.0),
            track_id: input.track_id.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            sponsor: input.sponsor,
            extra: Json(extension_map(input.extra).unwrap_or_default()),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            enrollments: input.enrollments,
            course_results: input.course_results,
            notes: input.notes,
        };

        let created = self.candidate_repo.create(&candidate).await?;
        info!(id = %created.id, status = %created.status, "Candidate imported");

        self.audit(
            "candidate.imported",
            json!({ "candidateId": created.id, "name": created.name }),
        )
        .await;
        Ok(created)
    }

    /// List all candidates, newest first.
    pub async fn list(&self) -> AppResult<Vec<Candidate>> {
        self.candidate_repo.find_all().await
    }

    /// Fetch one candidate by id.
    pub async fn get(&self, id: &str) -> AppResult<Candidate> {
        self.candidate_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Candidate '{id}' not found")))
    }

    /// Apply a partial update.
    pub async fn update(&self, id: &str, input: UpdateCandidateInput) -> AppResult<Candidate> {
        let mut candidate = self.get(id).await?;
        let previous_status = candidate.status;

        if let Some(name) = input.name {
            candidate.name = name;
        }
        input.email.apply_to(&mut candidate.email);
        input.mobile.apply_to(&mut candidate.mobile);
        input.national_id.apply_to(&mut candidate.national_id);
        input.emirate.apply_to(&mut candidate.emirate);
        input.subject.apply_to(&mut candidate.subject);
        if let Some(gpa) = input.gpa {
            candidate.gpa = gpa;
        }
        if let Some(track_id) = input.track_id {
            candidate.track_id = track_id;
        }
        if let Some(status) = input.status {
            candidate.status = status;
        }
        input.sponsor.apply_to(&mut candidate.sponsor);
        if let Some(extra) = extension_map(input.extra) {
            candidate.extra = Json(extra);
        }

        let mut updated = self.candidate_repo.update_row(&candidate).await?;

        if let Some(enrollments) = &input.enrollments {
            self.candidate_repo.replace_enrollments(id, enrollments).await?;
        }
        if let Some(results) = &input.course_results {
            self.candidate_repo.replace_results(id, results).await?;
        }
        if let Some(notes) = &input.notes {
            self.candidate_repo.replace_notes(id, notes).await?;
        }

        // Reload so the returned children carry their server-assigned ids.
        updated = self
            .candidate_repo
            .find_by_id(id)
            .await?
            .unwrap_or(updated);

        if previous_status != updated.status {
            self.audit(
                "candidate.statusChanged",
                json!({
                    "candidateId": updated.id,
                    "from": previous_status,
                    "to": updated.status,
                }),
            )
            .await;
        }
        Ok(updated)
    }

    /// Hard-delete a candidate; owned children cascade.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.candidate_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Candidate '{id}' not found")));
        }
        info!(id, "Candidate deleted");
        self.audit("candidate.deleted", json!({ "candidateId": id }))
            .await;
        Ok(())
    }

    /// Best-effort audit append; a failed write is logged, never fatal.
    async fn audit(&self, event_type: &str, payload: Value) {
        let entry = AuditEntry {
            id: Uuid::new_v4(),
            event_type: event_type.to_string(),
            payload: Json(payload),
            created_at: chrono::Utc::now(),
        };
        if let Err(e) = self.audit_repo.append(&entry).await {
            warn!(event_type, error = %e, "Failed to append audit entry");
        }
    }
}
