use crate::http::query::first_value;
use crate::http::responses::{error_response, failed_response, ok_response};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use dashboard_service::{
    Aggregator, ApiResponse, Combination, MatchMode, ParsedCategoryList, DEFAULT_CATEGORY,
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub(crate) async fn get_interest_detail(
    query: Query<Vec<(String, String)>>,
    aggregator: Data<Arc<Aggregator>>,
    match_mode: Data<MatchMode>,
) -> HttpResponse {
    let category = first_value(&query, "category").unwrap_or(DEFAULT_CATEGORY);

    let combination = match ParsedCategoryList::parse(category)
        .and_then(|list| Combination::select(&list, *match_mode.get_ref()))
    {
        Ok(combination) => combination,
        Err(error) => {
            warn!(%error, category, "Rejected interest detail request");
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    match aggregator.aggregate(&combination).await {
        Ok(response) => {
            info!(categories = ?combination.categories(), "Interest detail served");
            ok_response(&response)
        }
        Err(error) => {
            error!(?error, ?combination, "Unable to aggregate interest detail");
            failed_response(&ApiResponse::failed())
        }
    }
}
