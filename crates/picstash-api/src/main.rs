use picstash_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    picstash_api::telemetry::init_telemetry();

    let config = Config::from_env()?;

    let (_state, router) = picstash_api::setup::initialize_app(config.clone()).await?;

    picstash_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
