use aws_config::BehaviorVersion;
use ingest_gateway::channel::{DynOutputChannel, SqsChannel};
use ingest_gateway::config;
use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ingest_gateway::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let aws_config = aws_config::load_defaults(BehaviorVersion::v2023_11_09()).await;
    let config = config::Config::load_from_env()?;
    let channel: DynOutputChannel =
        Arc::new(SqsChannel::new(&aws_config, config.queue_url.clone()));

    run(service_fn(|request: Request| {
        ingest_gateway::function_handler(&config, channel.clone(), request)
    }))
    .await
}
