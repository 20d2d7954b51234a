use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use flavormap_core::domain::{
    common::{CompletionConfig, FlavorMapConfig, VideoConfig},
    completion::entities::ApproximateLocation,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "flavormap-api", version, about = "FlavorMap API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub completion: CompletionArgs,

    #[command(flatten)]
    pub video: VideoArgs,

    #[command(flatten)]
    pub search: SearchLocationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Timeout applied to every upstream API call.
    #[arg(
        long = "upstream-timeout-secs",
        env = "UPSTREAM_TIMEOUT_SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CompletionArgs {
    #[arg(
        id = "openai_api_key",
        long = "openai-api-key",
        env = "OPENAI_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    #[arg(
        id = "openai_base_url",
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VideoArgs {
    #[arg(
        id = "twelvelabs_api_key",
        long = "twelvelabs-api-key",
        env = "TWELVELABS_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub api_key: String,

    #[arg(long = "twelvelabs-index-id", env = "TWELVELABS_INDEX_ID", default_value = "")]
    pub index_id: String,

    #[arg(
        id = "twelvelabs_base_url",
        long = "twelvelabs-base-url",
        env = "TWELVELABS_BASE_URL",
        default_value = "https://api.twelvelabs.io/v1.3"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SearchLocationArgs {
    #[arg(
        long = "search-city",
        env = "SEARCH_CITY",
        default_value = "San Francisco, Chinatown"
    )]
    pub city: String,

    #[arg(long = "search-region", env = "SEARCH_REGION", default_value = "California")]
    pub region: String,

    #[arg(long = "search-country", env = "SEARCH_COUNTRY", default_value = "US")]
    pub country: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FlavorMapConfig {
    fn from(args: Args) -> Self {
        let timeout = Duration::from_secs(args.server.upstream_timeout_secs);

        FlavorMapConfig {
            completion: CompletionConfig {
                api_key: args.completion.api_key,
                model: args.completion.model,
                base_url: args.completion.base_url,
                timeout,
            },
            video: VideoConfig {
                api_key: args.video.api_key,
                index_id: args.video.index_id,
                base_url: args.video.base_url,
                timeout,
            },
            search_location: ApproximateLocation::new(
                args.search.city,
                args.search.region,
                args.search.country,
            ),
        }
    }
}
