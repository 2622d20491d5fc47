use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "SUCCESS";
pub const STATUS_FAILED: &str = "FAILED";
/// Status used by the download export envelope.
pub const STATUS_EXPORTED: &str = "Success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Music {
    pub rank: u32,
    pub title: String,
    pub singer: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct News {
    #[serde(default)]
    pub domestic: Vec<NewsArticle>,
    #[serde(default)]
    pub international: Vec<NewsArticle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeSearchDetail {
    pub rank: u32,
    pub keyword: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RealtimeSearchDetailWrapper {
    pub realtime_search_details: Vec<RealtimeSearchDetail>,
}

/// Crawled data set stamped with the unix time it was collected at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub crawled_at: i64,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
}

impl ApiResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }

    pub fn success() -> Self {
        Self::new(STATUS_SUCCESS)
    }

    pub fn failed() -> Self {
        Self::new(STATUS_FAILED)
    }
}

/// Response of the interest detail endpoint. Only the fields of the requested
/// categories are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllCategoriesResponse {
    #[serde(flatten)]
    pub api_response: ApiResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Vec<Music>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<News>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_search: Option<RealtimeSearchDetailWrapper>,
}

impl AllCategoriesResponse {
    pub fn success() -> Self {
        Self {
            api_response: ApiResponse::success(),
            music: None,
            news: None,
            realtime_search: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownloadData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Vec<Snapshot<Vec<Music>>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<Snapshot<News>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_search: Option<Vec<Snapshot<RealtimeSearchDetailWrapper>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadDataResponse {
    #[serde(flatten)]
    pub api_response: ApiResponse,
    #[serde(rename = "Result")]
    pub result: DownloadData,
}

impl DownloadDataResponse {
    pub fn exported(result: DownloadData) -> Self {
        Self {
            api_response: ApiResponse::new(STATUS_EXPORTED),
            result,
        }
    }
}
