use log::debug;

mod cli;

#[tokio::main]
async fn main() {
    // A missing .env file is fine, credentials may come from the environment
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = cli::run().await {
        debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
