use crate::http::query::first_value;
use crate::http::responses::{error_response, ok_response};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Query};
use actix_web::{HttpResponse, ResponseError};
use dashboard_service::{DashboardServiceError, DownloadDataResponse, SharedDashboardService};
use tracing::{error, info};

#[derive(Debug)]
pub(crate) struct DownloadQuery {
    category: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl DownloadQuery {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let value = |key: &str| first_value(pairs, key).map(String::from);

        Self {
            category: value("category"),
            start_date: value("start_date"),
            end_date: value("end_date"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum DownloadError {
    #[error("category parameter is required")]
    MissingCategory,
    #[error("invalid start_date parameter")]
    InvalidStartDate,
    #[error("invalid end_date parameter")]
    InvalidEndDate,
    #[error(transparent)]
    DashboardServiceError(#[from] DashboardServiceError),
}

impl ResponseError for DownloadError {
    fn status_code(&self) -> StatusCode {
        match self {
            DownloadError::DashboardServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_response(self.status_code(), self)
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct DownloadRequest {
    pub(crate) categories: Vec<String>,
    pub(crate) start_date: i64,
    pub(crate) end_date: i64,
}

impl TryFrom<&DownloadQuery> for DownloadRequest {
    type Error = DownloadError;

    fn try_from(query: &DownloadQuery) -> Result<Self, Self::Error> {
        let categories: Vec<String> = query
            .category
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .map(String::from)
            .collect();

        if categories.is_empty() {
            return Err(DownloadError::MissingCategory);
        }

        let start_date = parse_date(query.start_date.as_deref())
            .ok_or(DownloadError::InvalidStartDate)?;
        let end_date =
            parse_date(query.end_date.as_deref()).ok_or(DownloadError::InvalidEndDate)?;

        Ok(Self {
            categories,
            start_date,
            end_date,
        })
    }
}

fn parse_date(value: Option<&str>) -> Option<i64> {
    value.and_then(|value| value.parse::<i64>().ok())
}

pub(crate) async fn get_download_data(
    query: Query<Vec<(String, String)>>,
    dashboard_service: Data<SharedDashboardService>,
) -> Result<HttpResponse, DownloadError> {
    let request = DownloadRequest::try_from(&DownloadQuery::from_pairs(&query))?;

    let data = dashboard_service
        .get_download_data(&request.categories, request.start_date, request.end_date)
        .await
        .map_err(|error| {
            error!(?error, ?request, "Unable to get download data");
            error
        })?;

    info!(
        categories = ?request.categories,
        start_date = request.start_date,
        end_date = request.end_date,
        "Download data served"
    );

    Ok(ok_response(&DownloadDataResponse::exported(data)))
}
