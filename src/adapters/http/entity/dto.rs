//! Response DTOs for the entity endpoints.

use serde::Serialize;

use crate::domain::entity::EntityProfile;
use crate::domain::foundation::Audience;

/// Response for `GET /api/entities`.
#[derive(Debug, Clone, Serialize)]
pub struct EntityListResponse {
    pub audience: Audience,
    pub entities: Vec<EntityProfile>,
}
