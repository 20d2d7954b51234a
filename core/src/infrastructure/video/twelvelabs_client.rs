use reqwest::{Client, RequestBuilder, Url, multipart::Form};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    domain::{
        common::{VideoConfig, entities::app_errors::CoreError},
        video_search::{
            entities::{VideoDetails, VideoSearchMatch},
            ports::VideoSearchClient,
            value_objects::SearchQuery,
        },
    },
    infrastructure::{map_body_error, map_transport_error, read_error_body},
};

/// Client for a TwelveLabs compatible video search API.
#[derive(Debug, Clone)]
pub struct TwelveLabsVideoClient {
    api_key: String,
    index_id: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<VideoSearchMatch>,
}

#[derive(Debug, Deserialize)]
struct VideoResponse {
    #[serde(default)]
    hls: Option<Hls>,
}

#[derive(Debug, Deserialize)]
struct Hls {
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    thumbnail_urls: Vec<String>,
}

impl TwelveLabsVideoClient {
    pub fn new(config: VideoConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build video search http client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key,
            index_id: config.index_id,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn search_form(&self, query: &SearchQuery) -> Form {
        query.modalities.iter().fold(
            Form::new()
                .text("index_id", self.index_id.clone())
                .text("query_text", query.text.clone()),
            |form, modality| form.text("search_options", modality.as_str()),
        )
    }

    /// `{base}/indexes/{index}/videos/{id}` with every id percent-encoded as a
    /// single path segment.
    fn video_url(&self, video_id: &str) -> Result<Url, CoreError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid video search base url {}: {}", self.base_url, e);
            CoreError::InternalServerError
        })?;

        url.path_segments_mut()
            .map_err(|_| CoreError::InternalServerError)?
            .pop_if_empty()
            .push("indexes")
            .push(&self.index_id)
            .push("videos")
            .push(video_id);

        Ok(url)
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, CoreError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = request
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| map_transport_error("Video search API", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = read_error_body("Video search API", response).await?;
            tracing::error!("Video search API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| map_body_error("video search", e))
    }
}

impl VideoSearchClient for TwelveLabsVideoClient {
    #[instrument(skip(self, query), fields(query = %query.text))]
    async fn search(&self, query: SearchQuery) -> Result<Vec<VideoSearchMatch>, CoreError> {
        let request = self
            .client
            .post(format!("{}/search", self.base_url))
            .multipart(self.search_form(&query));

        let response: SearchResponse = self.send(request).await?;
        Ok(response.data)
    }

    #[instrument(skip(self))]
    async fn retrieve_video(&self, video_id: String) -> Result<VideoDetails, CoreError> {
        let url = self.video_url(&video_id)?;
        let request = self.client.get(url);

        let response: VideoResponse = self.send(request).await?;

        let (stream_url, thumbnail_url) = match response.hls {
            Some(hls) => (hls.video_url, hls.thumbnail_urls.into_iter().next()),
            None => (None, None),
        };

        Ok(VideoDetails {
            video_id,
            stream_url,
            thumbnail_url,
        })
    }
}
