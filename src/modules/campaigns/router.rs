use axum::{Router, routing::get};

use crate::modules::campaigns::controller::{
    create_campaign, delete_campaign, get_campaign, get_campaigns, update_campaign,
};
use crate::state::AppState;

pub fn init_campaigns_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_campaigns).post(create_campaign))
        .route(
            "/{id}",
            get(get_campaign).put(update_campaign).delete(delete_campaign),
        )
}
