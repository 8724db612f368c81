//! Live provider tests against the real BioGRID and STRING services.
//!
//! Run with: cargo test --package interactome-sources --test test_sources_live -- --ignored --nocapture

use secrecy::SecretString;

use interactome_common::entities::taxon;
use interactome_common::{Config, InteractionQuery};
use interactome_sources::{BioGridClient, InteractionSource, StringDbClient};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .try_init();
}

#[tokio::test]
#[ignore] // Requires network access
async fn string_fetch_tp53() {
    init_tracing();
    let client = StringDbClient::new(&Config::default()).expect("client");
    let query = InteractionQuery::new("TP53", taxon::HUMAN).with_limit(10);

    let records = client.fetch(&query).await.expect("STRING fetch failed");

    println!("Found {} interactions", records.len());
    for rec in records.iter().take(5) {
        println!("{} -- {} ({:?})", rec.source_label, rec.target_label, rec.confidence);
    }

    assert!(!records.is_empty());
    assert!(records.iter().any(|r| r.source_label == "TP53" || r.target_label == "TP53"));
}

#[tokio::test]
#[ignore] // Requires network access and BIOGRID_ACCESS_KEY
async fn biogrid_fetch_tp53() {
    init_tracing();
    dotenvy::dotenv().ok();
    let key = match std::env::var("BIOGRID_ACCESS_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("BIOGRID_ACCESS_KEY not set; skipping");
            return;
        }
    };

    let client = BioGridClient::new(&Config::default(), Some(SecretString::from(key)))
        .expect("client");
    let query = InteractionQuery::new("TP53", taxon::HUMAN);

    let records = client.fetch(&query).await.expect("BioGRID fetch failed");

    println!("Found {} interactions", records.len());
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| !r.source_id.is_empty() && !r.target_id.is_empty()));
}
