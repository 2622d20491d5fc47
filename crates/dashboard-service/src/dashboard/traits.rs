use crate::dashboard::types::{DownloadData, Music, News, RealtimeSearchDetailWrapper};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DashboardServiceError(pub Box<dyn std::error::Error + Send + Sync>);

impl DashboardServiceError {
    pub fn new(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(error.into())
    }
}

#[async_trait]
pub trait DashboardService {
    async fn get_music_list(&self) -> Result<Vec<Music>, DashboardServiceError>;
    async fn get_news_details(&self) -> Result<News, DashboardServiceError>;
    async fn get_realtime_search_detail_list(
        &self,
    ) -> Result<RealtimeSearchDetailWrapper, DashboardServiceError>;
    async fn get_download_data(
        &self,
        categories: &[String],
        start_date: i64,
        end_date: i64,
    ) -> Result<DownloadData, DashboardServiceError>;
}

pub type SharedDashboardService = Arc<dyn DashboardService + Send + Sync>;
