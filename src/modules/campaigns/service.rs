use tracing::{debug, info, instrument};
use uuid::Uuid;

use questlog_core::AppError;

use super::model::{Campaign, CreateCampaignDto, UpdateCampaignDto};
use super::store::CampaignStore;

pub struct CampaignService;

impl CampaignService {
    #[instrument(skip(campaigns))]
    pub fn get_campaigns(campaigns: &CampaignStore) -> Vec<Campaign> {
        let all = campaigns.list();
        debug!(count = all.len(), "Listed campaigns");
        all
    }

    #[instrument(skip(campaigns), fields(campaign.id = %id))]
    pub fn get_campaign(campaigns: &CampaignStore, id: Uuid) -> Result<Campaign, AppError> {
        campaigns
            .get(&id)
            .ok_or_else(|| AppError::not_found("Campaign not found"))
    }

    #[instrument(skip(campaigns, dto), fields(campaign.name = %dto.name, user.id = %created_by))]
    pub fn create_campaign(
        campaigns: &CampaignStore,
        created_by: Uuid,
        dto: CreateCampaignDto,
    ) -> Result<Campaign, AppError> {
        let campaign = campaigns.insert(Campaign::new(
            dto.name,
            dto.game_system,
            dto.description,
            created_by,
        ));

        info!(campaign.id = %campaign.id, campaign.name = %campaign.name, "Campaign created");
        Ok(campaign)
    }

    #[instrument(skip(campaigns, dto), fields(campaign.id = %id))]
    pub fn update_campaign(
        campaigns: &CampaignStore,
        id: Uuid,
        dto: UpdateCampaignDto,
    ) -> Result<Campaign, AppError> {
        let campaign = campaigns
            .update(&id, |campaign| {
                if let Some(name) = dto.name {
                    campaign.name = name;
                }
                if let Some(game_system) = dto.game_system {
                    campaign.game_system = game_system;
                }
                if let Some(description) = dto.description {
                    campaign.description = Some(description);
                }
            })
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;

        info!(campaign.id = %campaign.id, "Campaign updated");
        Ok(campaign)
    }

    #[instrument(skip(campaigns), fields(campaign.id = %id))]
    pub fn delete_campaign(campaigns: &CampaignStore, id: Uuid) -> Result<(), AppError> {
        campaigns
            .remove(&id)
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;

        info!(campaign.id = %id, "Campaign deleted");
        Ok(())
    }
}
