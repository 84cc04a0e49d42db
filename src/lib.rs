use http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::channel::DynOutputChannel;
use crate::config::Config;

pub mod channel;
pub mod config;
pub mod validate;

pub fn set_up_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

// lambda handler
pub async fn function_handler(
    config: &Config,
    channel: DynOutputChannel,
    request: Request,
) -> Result<Response<Body>, Error> {
    debug!("handling {} {}", request.method(), request.uri());

    // every failure mode collapses to a bare 400; the typed error is for
    // logging only
    let decoded = match validate::validate(request.body(), &config.required_fields) {
        Ok(text) => text,
        Err(err) => {
            info!("rejecting payload - {}", err);
            return response(StatusCode::BAD_REQUEST);
        }
    };

    channel.set(&decoded).await?;
    debug!("payload accepted, {} bytes forwarded", decoded.len());

    response(StatusCode::OK)
}

fn response(status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder().status(status).body(Body::Empty)?)
}
