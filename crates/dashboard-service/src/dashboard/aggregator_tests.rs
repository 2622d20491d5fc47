use super::{
    Aggregator, DashboardService, DashboardServiceError, DownloadData, Music, News, NewsArticle,
    RealtimeSearchDetail, RealtimeSearchDetailWrapper, STATUS_SUCCESS,
};
use crate::category::Combination;
use async_trait::async_trait;
use std::io::{Error, ErrorKind};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Music,
    News,
    RealtimeSearch,
}

struct DashboardServiceMock {
    calls: Mutex<Vec<Call>>,
    failing: Option<Call>,
}

impl DashboardServiceMock {
    fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
            failing: None,
        }
    }

    fn failing_on(call: Call) -> Self {
        Self {
            calls: Mutex::new(vec![]),
            failing: Some(call),
        }
    }

    fn record(&self, call: Call) -> Result<(), DashboardServiceError> {
        self.calls.lock().unwrap().push(call);

        if self.failing == Some(call) {
            return Err(DashboardServiceError::new(Error::from(ErrorKind::NotFound)));
        }

        Ok(())
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

fn musics() -> Vec<Music> {
    vec![Music {
        rank: 1,
        title: "Supernova".into(),
        singer: "aespa".into(),
        country: "domestic".into(),
    }]
}

fn news() -> News {
    News {
        domestic: vec![NewsArticle {
            title: "Election results".into(),
            link: "https://news.example/1".into(),
            keywords: vec!["election".into()],
        }],
        international: vec![],
    }
}

fn realtime_search() -> RealtimeSearchDetailWrapper {
    RealtimeSearchDetailWrapper {
        realtime_search_details: vec![RealtimeSearchDetail {
            rank: 1,
            keyword: "weather".into(),
            link: "https://search.example/?q=weather".into(),
        }],
    }
}

#[async_trait]
impl DashboardService for DashboardServiceMock {
    async fn get_music_list(&self) -> Result<Vec<Music>, DashboardServiceError> {
        self.record(Call::Music)?;
        Ok(musics())
    }

    async fn get_news_details(&self) -> Result<News, DashboardServiceError> {
        self.record(Call::News)?;
        Ok(news())
    }

    async fn get_realtime_search_detail_list(
        &self,
    ) -> Result<RealtimeSearchDetailWrapper, DashboardServiceError> {
        self.record(Call::RealtimeSearch)?;
        Ok(realtime_search())
    }

    async fn get_download_data(
        &self,
        _categories: &[String],
        _start_date: i64,
        _end_date: i64,
    ) -> Result<DownloadData, DashboardServiceError> {
        Ok(DownloadData::default())
    }
}

#[actix_rt::test]
async fn test_single_category_fills_one_field() {
    let service = Arc::new(DashboardServiceMock::new());
    let aggregator = Aggregator::new(service.clone());

    let response = aggregator.aggregate(&Combination::Music).await.unwrap();
    assert_eq!(STATUS_SUCCESS, response.api_response.status);
    assert_eq!(Some(musics()), response.music);
    assert_eq!(None, response.news);
    assert_eq!(None, response.realtime_search);

    let response = aggregator.aggregate(&Combination::News).await.unwrap();
    assert_eq!(None, response.music);
    assert_eq!(Some(vec![news()]), response.news);
    assert_eq!(None, response.realtime_search);

    let response = aggregator
        .aggregate(&Combination::RealtimeSearch)
        .await
        .unwrap();
    assert_eq!(None, response.music);
    assert_eq!(None, response.news);
    assert_eq!(Some(realtime_search()), response.realtime_search);

    assert_eq!(
        vec![Call::Music, Call::News, Call::RealtimeSearch],
        service.calls()
    );
}

#[actix_rt::test]
async fn test_pairs_are_fetched_in_fixed_order() {
    let cases = [
        (Combination::MusicAndNews, vec![Call::Music, Call::News]),
        (
            Combination::MusicAndRealtimeSearch,
            vec![Call::Music, Call::RealtimeSearch],
        ),
        (
            Combination::NewsAndRealtimeSearch,
            vec![Call::News, Call::RealtimeSearch],
        ),
    ];

    for (combination, expected_calls) in cases {
        let service = Arc::new(DashboardServiceMock::new());
        let aggregator = Aggregator::new(service.clone());

        let response = aggregator.aggregate(&combination).await.unwrap();

        assert_eq!(expected_calls, service.calls());
        assert_eq!(
            expected_calls.contains(&Call::Music),
            response.music.is_some()
        );
        assert_eq!(expected_calls.contains(&Call::News), response.news.is_some());
        assert_eq!(
            expected_calls.contains(&Call::RealtimeSearch),
            response.realtime_search.is_some()
        );
    }
}

#[actix_rt::test]
async fn test_all_categories_are_fetched() {
    let service = Arc::new(DashboardServiceMock::new());
    let aggregator = Aggregator::new(service.clone());

    let response = aggregator.aggregate(&Combination::All).await.unwrap();

    assert_eq!(
        vec![Call::Music, Call::RealtimeSearch, Call::News],
        service.calls()
    );
    assert_eq!(Some(musics()), response.music);
    assert_eq!(Some(vec![news()]), response.news);
    assert_eq!(Some(realtime_search()), response.realtime_search);
}

#[actix_rt::test]
async fn test_first_failure_stops_remaining_fetches() {
    let service = Arc::new(DashboardServiceMock::failing_on(Call::RealtimeSearch));
    let aggregator = Aggregator::new(service.clone());

    let result = aggregator.aggregate(&Combination::All).await;

    assert!(result.is_err());
    assert_eq!(vec![Call::Music, Call::RealtimeSearch], service.calls());
}

#[actix_rt::test]
async fn test_failure_after_successful_fetch_is_reported() {
    let service = Arc::new(DashboardServiceMock::failing_on(Call::News));
    let aggregator = Aggregator::new(service.clone());

    let result = aggregator.aggregate(&Combination::MusicAndNews).await;

    assert!(result.is_err());
    assert_eq!(vec![Call::Music, Call::News], service.calls());
}
