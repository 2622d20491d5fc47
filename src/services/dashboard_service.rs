use crate::storage::on_disk::OnDiskStorage;
use async_trait::async_trait;
use dashboard_service::{
    Category, DashboardService, DashboardServiceError, DownloadData, Music, News,
    RealtimeSearchDetailWrapper, Snapshot,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

const MUSIC_SNAPSHOTS: &str = "music.json";
const NEWS_SNAPSHOTS: &str = "news.json";
const REALTIME_SEARCH_SNAPSHOTS: &str = "realtime-search.json";

/// Dashboard data backed by crawler snapshot files.
///
/// Every call reads the snapshot documents again so that a crawler rewriting
/// them is picked up on the next request.
pub(crate) struct SnapshotDashboardService {
    storage: Arc<OnDiskStorage>,
}

impl SnapshotDashboardService {
    pub(crate) fn new(storage: Arc<OnDiskStorage>) -> Self {
        Self { storage }
    }

    async fn load_snapshots<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Vec<Snapshot<T>>, DashboardServiceError> {
        let snapshots = self
            .storage
            .get::<Vec<Snapshot<T>>>(name)
            .await
            .map_err(DashboardServiceError::new)?;

        Ok(snapshots.unwrap_or_default())
    }

    async fn load_latest<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<T, DashboardServiceError> {
        self.load_snapshots::<T>(name)
            .await?
            .into_iter()
            .max_by_key(|snapshot| snapshot.crawled_at)
            .map(|snapshot| snapshot.data)
            .ok_or_else(|| DashboardServiceError::new(format!("No snapshot available in {name}")))
    }

    async fn load_range<T: DeserializeOwned>(
        &self,
        name: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<Vec<Snapshot<T>>, DashboardServiceError> {
        let mut snapshots: Vec<_> = self
            .load_snapshots::<T>(name)
            .await?
            .into_iter()
            .filter(|snapshot| (start_date..=end_date).contains(&snapshot.crawled_at))
            .collect();

        snapshots.sort_by_key(|snapshot| snapshot.crawled_at);

        debug!(
            document = name,
            start_date,
            end_date,
            count = snapshots.len(),
            "Loaded snapshots"
        );

        Ok(snapshots)
    }
}

#[async_trait]
impl DashboardService for SnapshotDashboardService {
    async fn get_music_list(&self) -> Result<Vec<Music>, DashboardServiceError> {
        self.load_latest(MUSIC_SNAPSHOTS).await
    }

    async fn get_news_details(&self) -> Result<News, DashboardServiceError> {
        self.load_latest(NEWS_SNAPSHOTS).await
    }

    async fn get_realtime_search_detail_list(
        &self,
    ) -> Result<RealtimeSearchDetailWrapper, DashboardServiceError> {
        self.load_latest(REALTIME_SEARCH_SNAPSHOTS).await
    }

    async fn get_download_data(
        &self,
        categories: &[String],
        start_date: i64,
        end_date: i64,
    ) -> Result<DownloadData, DashboardServiceError> {
        let mut data = DownloadData::default();

        for category in categories {
            match category
                .parse::<Category>()
                .map_err(DashboardServiceError::new)?
            {
                Category::Music => {
                    data.music =
                        Some(self.load_range(MUSIC_SNAPSHOTS, start_date, end_date).await?);
                }
                Category::News => {
                    data.news = Some(self.load_range(NEWS_SNAPSHOTS, start_date, end_date).await?);
                }
                Category::RealtimeSearch => {
                    data.realtime_search = Some(
                        self.load_range(REALTIME_SEARCH_SNAPSHOTS, start_date, end_date)
                            .await?,
                    );
                }
            }
        }

        Ok(data)
    }
}
