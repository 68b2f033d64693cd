use poet_lookup::{Config, PoetLookup, PoetryDb, Server, app, logging};

#[tokio::main]
async fn main() -> Result<(), poet_lookup::Error> {
    let config = Config::from_env()?;
    logging::init(config.log_format);

    tracing::info!(
        bind_addr = %config.bind_addr,
        upstream_url = %config.upstream_url,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "configuration loaded"
    );

    let source = PoetryDb::new(config.upstream_url, config.upstream_timeout)?;

    Server::bind(&config.bind_addr)
        .await?
        .serve(app(PoetLookup::new(source)))
        .await
}
