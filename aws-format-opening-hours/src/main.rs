use lambda_http::{
    http::StatusCode, run, service_fn, Body, Error, IntoResponse, Request, RequestExt, Response,
};
use opening_hours_libs::{config::Config, response::respond};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn function_handler(event: Request, config: &Config) -> Result<impl IntoResponse, Error> {
    let query = event
        .query_string_parameters_ref()
        .and_then(|params| params.first(&config.query_parameter));

    let (status, body) = respond(query, config);

    if status == StatusCode::OK.as_u16() {
        info!(status, "formatted opening hours");
    } else {
        warn!(status, ?body, "rejected request");
    }

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body)?))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env();
    info!(?config, "loaded configuration");

    let config = &config;
    run(service_fn(move |event: Request| async move {
        function_handler(event, config).await
    }))
    .await
}
