mod api_doc;
mod config;
mod error;
mod handlers;
mod routes;
mod server;
#[cfg(test)]
mod test_support;

use config::Config;
use server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "hello_gke=info,tower_http=info";

/// The greeting log line is part of the `GET /` contract; no filter may drop it.
const GREETING_LOG_DIRECTIVE: &str = "hello_gke::handlers::root=info";

fn log_filter(spec: &str) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_new(spec)?.add_directive(GREETING_LOG_DIRECTIVE.parse()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(log_filter(&filter_spec)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hello-gke starting");

    let config = Config::from_env()?;
    config.log_startup();

    Server::new(config).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;

    async fn greeting_lines_under(spec: &str) -> usize {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::registry()
            .with(log_filter(spec).unwrap())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(logs.clone()),
            );
        let _guard = tracing::subscriber::set_default(subscriber);

        handlers::root_handler().await;
        logs.count("Hello endpoint hit")
    }

    #[tokio::test]
    async fn test_greeting_line_survives_restrictive_filter() {
        assert_eq!(greeting_lines_under("warn").await, 1);
        assert_eq!(greeting_lines_under("off").await, 1);
        assert_eq!(greeting_lines_under(DEFAULT_LOG_FILTER).await, 1);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(log_filter("hello_gke=notalevel").is_err());
    }
}
