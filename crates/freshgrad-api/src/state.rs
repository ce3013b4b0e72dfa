//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use freshgrad_auth::jwt::{JwtDecoder, JwtEncoder};
use freshgrad_auth::password::PasswordHasher;
use freshgrad_core::config::AppConfig;

use freshgrad_database::repositories::audit::AuditRepository;
use freshgrad_database::repositories::candidate::CandidateRepository;
use freshgrad_database::repositories::correction::CorrectionRepository;
use freshgrad_database::repositories::course::CourseRepository;
use freshgrad_database::repositories::mentor::MentorRepository;
use freshgrad_database::repositories::notification::NotificationRepository;
use freshgrad_database::repositories::reference::ReferenceRepository;
use freshgrad_database::repositories::user::UserRepository;

use freshgrad_service::candidate::CandidateService;
use freshgrad_service::correction::CorrectionService;
use freshgrad_service::course::CourseService;
use freshgrad_service::mentor::MentorService;
use freshgrad_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Notification repository.
    pub notification_repo: Arc<NotificationRepository>,
    /// Audit log repository.
    pub audit_repo: Arc<AuditRepository>,
    /// Reference data repository.
    pub reference_repo: Arc<ReferenceRepository>,

    /// User registration, login, and administration.
    pub user_service: Arc<UserService>,
    /// Candidate lifecycle service.
    pub candidate_service: Arc<CandidateService>,
    /// Course catalogue service.
    pub course_service: Arc<CourseService>,
    /// Mentor registry service.
    pub mentor_service: Arc<MentorService>,
    /// Correction workflow service.
    pub correction_service: Arc<CorrectionService>,
}

impl AppState {
    /// Wires repositories and services around a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let candidate_repo = Arc::new(CandidateRepository::new(db_pool.clone()));
        let mentor_repo = Arc::new(MentorRepository::new(db_pool.clone()));
        let course_repo = Arc::new(CourseRepository::new(db_pool.clone()));
        let correction_repo = Arc::new(CorrectionRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let audit_repo = Arc::new(AuditRepository::new(db_pool.clone()));
        let reference_repo = Arc::new(ReferenceRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let candidate_service = Arc::new(CandidateService::new(
            Arc::clone(&candidate_repo),
            Arc::clone(&audit_repo),
        ));
        let course_service = Arc::new(CourseService::new(Arc::clone(&course_repo)));
        let mentor_service = Arc::new(MentorService::new(Arc::clone(&mentor_repo)));
        let correction_service = Arc::new(CorrectionService::new(
            Arc::clone(&correction_repo),
            Arc::clone(&candidate_repo),
            Arc::clone(&notification_repo),
            Arc::clone(&audit_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            notification_repo,
            audit_repo,
            reference_repo,
            user_service,
            candidate_service,
            course_service,
            mentor_service,
            correction_service,
        }
    }
}
