use raven_api::RavenClient;
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let Ok(api_key) = env::var("RAVEN_API_KEY") else {
        eprintln!("Error: RAVEN_API_KEY not set.");
        eprintln!("Create a .env file with:");
        eprintln!("RAVEN_API_KEY=your_key_here\n");
        return;
    };

    let client = match RavenClient::new(api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating client: {}", e);
            return;
        }
    };

    println!("Fetching profile info from Raven Tools...\n");

    match client.profile_info().await {
        Ok(profile) => println!("{:#}", profile),
        Err(e) => {
            eprintln!("Error fetching profile: {}", e);
            return;
        }
    }

    match client.domains().await {
        Ok(serde_json::Value::Array(domains)) => {
            println!("\nFound {} domains:", domains.len());
            for (i, domain) in domains.iter().enumerate() {
                println!("{}. {}", i + 1, domain);
            }
        }
        Ok(other) => println!("\nDomains: {}", other),
        Err(e) => eprintln!("Error fetching domains: {}", e),
    }
}
