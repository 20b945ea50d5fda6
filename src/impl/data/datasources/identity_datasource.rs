use async_trait::async_trait;

use crate::{entities::UserId, errors::ReportError};

/// Session contract of the identity collaborator. The crate only needs the
/// current user id; sign-in/sign-up flows stay with the embedding
/// application.
#[async_trait]
pub trait IdentityDatasource: Send + Sync {
    /// The signed-in user, or `None` for an anonymous session.
    async fn current_user(&self) -> Result<Option<UserId>, ReportError>;
}

/// Fixed session identity, for embedded use and tests.
pub struct StaticIdentityDatasource {
    user: Option<UserId>,
}

impl StaticIdentityDatasource {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityDatasource for StaticIdentityDatasource {
    async fn current_user(&self) -> Result<Option<UserId>, ReportError> {
        Ok(self.user)
    }
}
