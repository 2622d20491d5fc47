use crate::category::Combination;
use crate::dashboard::traits::{DashboardServiceError, SharedDashboardService};
use crate::dashboard::types::{AllCategoriesResponse, Music, News, RealtimeSearchDetailWrapper};
use tracing::{debug, error};

/// Collects the data sets of a category combination into a single response.
///
/// Fetches run one after another in a fixed order per combination. The first
/// failing fetch aborts the remaining ones and no partial response is produced.
pub struct Aggregator {
    dashboard_service: SharedDashboardService,
}

impl Aggregator {
    pub fn new(dashboard_service: SharedDashboardService) -> Self {
        Self { dashboard_service }
    }

    pub async fn aggregate(
        &self,
        combination: &Combination,
    ) -> Result<AllCategoriesResponse, DashboardServiceError> {
        let mut response = AllCategoriesResponse::success();

        match combination {
            Combination::Music => {
                response.music = Some(self.fetch_music().await?);
            }
            Combination::News => {
                response.news = Some(vec![self.fetch_news().await?]);
            }
            Combination::RealtimeSearch => {
                response.realtime_search = Some(self.fetch_realtime_search().await?);
            }
            Combination::MusicAndNews => {
                response.music = Some(self.fetch_music().await?);
                response.news = Some(vec![self.fetch_news().await?]);
            }
            Combination::MusicAndRealtimeSearch => {
                response.music = Some(self.fetch_music().await?);
                response.realtime_search = Some(self.fetch_realtime_search().await?);
            }
            Combination::NewsAndRealtimeSearch => {
                response.news = Some(vec![self.fetch_news().await?]);
                response.realtime_search = Some(self.fetch_realtime_search().await?);
            }
            Combination::All => {
                response.music = Some(self.fetch_music().await?);
                response.realtime_search = Some(self.fetch_realtime_search().await?);
                response.news = Some(vec![self.fetch_news().await?]);
            }
        }

        Ok(response)
    }

    async fn fetch_music(&self) -> Result<Vec<Music>, DashboardServiceError> {
        match self.dashboard_service.get_music_list().await {
            Ok(musics) => {
                debug!(count = musics.len(), "Fetched music list");
                Ok(musics)
            }
            Err(error) => {
                error!(?error, "Unable to fetch music list");
                Err(error)
            }
        }
    }

    async fn fetch_news(&self) -> Result<News, DashboardServiceError> {
        match self.dashboard_service.get_news_details().await {
            Ok(news) => {
                debug!(
                    domestic = news.domestic.len(),
                    international = news.international.len(),
                    "Fetched news details"
                );
                Ok(news)
            }
            Err(error) => {
                error!(?error, "Unable to fetch news details");
                Err(error)
            }
        }
    }

    async fn fetch_realtime_search(
        &self,
    ) -> Result<RealtimeSearchDetailWrapper, DashboardServiceError> {
        match self.dashboard_service.get_realtime_search_detail_list().await {
            Ok(wrapper) => {
                debug!(
                    count = wrapper.realtime_search_details.len(),
                    "Fetched realtime search details"
                );
                Ok(wrapper)
            }
            Err(error) => {
                error!(?error, "Unable to fetch realtime search details");
                Err(error)
            }
        }
    }
}
