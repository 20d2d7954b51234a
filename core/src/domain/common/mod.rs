use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::completion::entities::ApproximateLocation;

pub mod entities;
pub mod services;

pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct FlavorMapConfig {
    pub completion: CompletionConfig,
    pub video: VideoConfig,
    pub search_location: ApproximateLocation,
}

#[derive(Clone, Debug)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct VideoConfig {
    pub api_key: String,
    pub index_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl CompletionConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl VideoConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.index_id.trim().is_empty()
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Hashes a client-supplied device identifier so it can be logged.
pub fn hash_device_id(device_id: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(device_id.as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_v7_is_time_ordered() {
        let first = generate_uuid_v7();
        std::thread::sleep(Duration::from_millis(2));
        let second = generate_uuid_v7();
        assert!(first < second);
        assert_eq!(first.get_version_num(), 7);
    }

    #[test]
    fn device_hash_is_stable_and_short() {
        let a = hash_device_id("browser-123");
        let b = hash_device_id("browser-123");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert_ne!(a, hash_device_id("browser-456"));
    }

    #[test]
    fn video_config_requires_key_and_index() {
        let config = VideoConfig {
            api_key: "key".to_string(),
            index_id: " ".to_string(),
            base_url: "http://localhost".to_string(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
        };
        assert!(!config.is_configured());
    }
}
