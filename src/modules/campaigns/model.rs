//! Campaign data models and DTOs.
//!
//! # Core Types
//!
//! - [`Campaign`] - A tabletop campaign tracked by the API
//!
//! # Request DTOs
//!
//! - [`CreateCampaignDto`] - Create a new campaign (admin or gamemaster)
//! - [`UpdateCampaignDto`] - Partial update of an existing campaign

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A tabletop campaign.
///
/// `created_by` is the id of the account that created the campaign, stamped
/// from the authenticated identity rather than taken from the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    /// The game system the campaign runs on (e.g. "D&D 5e", "Pathfinder 2e").
    pub game_system: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Builds a new campaign with a fresh id; `created_at` and `updated_at`
    /// start equal.
    pub fn new(
        name: String,
        game_system: String,
        description: Option<String>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            game_system,
            description,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new campaign.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCampaignDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub game_system: String,
    pub description: Option<String>,
}

/// DTO for updating a campaign. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCampaignDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub game_system: Option<String>,
    pub description: Option<String>,
}
