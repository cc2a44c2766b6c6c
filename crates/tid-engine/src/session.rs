use uuid::Uuid;

/// A live authenticated session as seen by the session provider.
///
/// The engine never validates credentials; it only interprets the session's
/// token to select a tenant.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub access_token: String,
}
