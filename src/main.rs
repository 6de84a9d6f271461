use tracing::info;

use ideaboard::config::load_config;
use ideaboard::transport::Server;
use ideaboard::utils::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    let settings = load_config().expect("Failed to load configuration");
    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let mut server = Server::new(settings);
    let bound = server
        .listen(&addr)
        .await
        .expect("Failed to bind server address");
    info!(%bound, "idea board ready");

    server.serve().await.expect("Server terminated");
}
