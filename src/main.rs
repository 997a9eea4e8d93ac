use notice_admin::models::config::ServerConfig;
use notice_admin::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = ServerConfig::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
