use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;

use coursewright::article::{ArticleGenerator, BatchProcessor};
use coursewright::config::Settings;
use coursewright::core::CredentialPool;
use coursewright::observability::init_tracing;
use coursewright::provider::{
    OpenAiClient, OpenAiConfig, OpenRouterClient, OpenRouterConfig, Provider,
};
use coursewright::server::{AppState, SharedGenerator, create_router};

fn build_generator(settings: &Settings) -> anyhow::Result<SharedGenerator> {
    let prefix = settings.llm.provider.api_key_env_prefix();
    let credentials = Arc::new(
        CredentialPool::from_env(prefix).context("cannot start without provider API keys")?,
    );
    tracing::info!(
        provider = %settings.llm.provider,
        model = %settings.llm.model,
        keys = credentials.len(),
        "Configured text generator"
    );

    let generator: SharedGenerator = match settings.llm.provider {
        Provider::OpenAI => {
            let mut config = OpenAiConfig::new(credentials)
                .with_model(settings.llm.model.clone())
                .with_http_config(settings.http_config());
            if let Some(base_url) = &settings.llm.base_url {
                config = config.with_base_url(base_url.clone());
            }
            Arc::new(OpenAiClient::new(config)?)
        }
        Provider::OpenRouter => {
            let mut config = OpenRouterConfig::new(credentials)
                .with_model(settings.llm.model.clone())
                .with_http_config(settings.http_config())
                .with_x_title("coursewright");
            if let Some(base_url) = &settings.llm.base_url {
                config = config.with_base_url(base_url.clone());
            }
            Arc::new(OpenRouterClient::new(config)?)
        }
    };

    Ok(generator)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let settings = Settings::from_env()?;
    let generator = build_generator(&settings)?;

    let article_generator = ArticleGenerator::new(generator).with_config(settings.article.clone());
    let state = AppState::new(BatchProcessor::new(article_generator));
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid SERVER_HOST/SERVER_PORT")?;
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
