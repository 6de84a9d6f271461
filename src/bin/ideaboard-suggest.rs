//! AI client: reads the board, asks the model for one new suggestion, adds
//! it, and repeats with a little jitter between rounds so several of these
//! can brainstorm together without talking over each other.

use std::time::Duration;

use rand::Rng;

use ideaboard::client::Client;
use ideaboard::suggest::SuggestionClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let addr = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: ideaboard-suggest <host:port>");
        std::process::exit(1);
    });

    let suggester = SuggestionClient::from_env().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let mut client = Client::connect(&addr).await.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    loop {
        let ideas = match client.list().await {
            Ok(ideas) => ideas,
            Err(e) => {
                eprintln!("lost server connection: {e}");
                std::process::exit(1);
            }
        };

        match suggester.suggest(&ideas).await {
            Ok(suggestion) => {
                println!("{suggestion}");
                if let Err(e) = client.add(&suggestion).await {
                    eprintln!("failed to add suggestion: {e}");
                    std::process::exit(1);
                }
            }
            Err(e) => eprintln!("suggestion failed: {e}"),
        }

        let pause = rand::thread_rng().gen_range(1..=20);
        tokio::time::sleep(Duration::from_secs(pause)).await;
    }
}
