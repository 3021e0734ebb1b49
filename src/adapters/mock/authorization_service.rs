use crate::domain::value_objects::UserId;
use crate::ports::authorization_service::{
    AuthorizationService as AuthorizationServiceTrait, Result,
};
use async_trait::async_trait;

/// Mock implementation of AuthorizationService
///
/// Demo policy: only strictly positive user ids are authorized.
/// Holds no state and never fails; stands in for a real user registry.
pub struct AuthorizationService;

impl AuthorizationService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthorizationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorizationServiceTrait for AuthorizationService {
    /// Check the demo policy: authorized iff user id > 0
    async fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        Ok(user_id.value() > 0)
    }
}
