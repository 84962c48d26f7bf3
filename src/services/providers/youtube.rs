//! YouTube Data API v3 provider
//!
//! Uses the `/search` endpoint restricted to videos and maps each hit to a
//! watch URL.

use crate::{
    error::{AppError, AppResult},
    models::ExternalContent,
    services::providers::ContentSearchProvider,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

impl YouTubeProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn to_content(response: SearchResponse) -> Vec<ExternalContent> {
        response
            .items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|video_id| ExternalContent {
                    title: item.snippet.title,
                    link: format!("https://www.youtube.com/watch?v={}", video_id),
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ContentSearchProvider for YouTubeProvider {
    async fn search(&self, query: &str, max_results: usize) -> AppResult<Vec<ExternalContent>> {
        let url = format!("{}/search", self.api_url);
        let max_results = max_results.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let search_response: SearchResponse = response.json().await?;
        let content = Self::to_content(search_response);

        tracing::info!(
            query = %query,
            result_count = content.len(),
            "YouTube search complete"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_video_results() {
        let raw = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "inpok4MKVLM"},
                 "snippet": {"title": "5-Minute Meditation"}},
                {"id": {"kind": "youtube#channel", "channelId": "UC123"},
                 "snippet": {"title": "Some Channel"}}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        let content = YouTubeProvider::to_content(response);

        assert_eq!(
            content,
            vec![ExternalContent {
                title: "5-Minute Meditation".to_string(),
                link: "https://www.youtube.com/watch?v=inpok4MKVLM".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(YouTubeProvider::to_content(response).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        let provider = YouTubeProvider::new("key".to_string(), "http://127.0.0.1:1".to_string());
        assert!(provider.search("calm", 3).await.is_err());
    }
}
