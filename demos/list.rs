//! Lists the first page of personal-data records against a local json-server.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off cargo run --example list --features tracing
//! ```

#![allow(clippy::print_stdout, reason = "Example output")]

use personal_data_client::Client;
use personal_data_client::types::{Filter, request::ListRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::default();

    let request = ListRequest::builder()
        .page(1)
        .limit(10)
        .filters(vec![Filter::builder().field("firstname").value("a").build()])
        .build();

    let page = client.list(&request).await?;

    println!("total matching records: {:?}", page.total_count);
    for record in page.items {
        println!("{:?}: {:?}", record.id, record.firstname);
    }

    Ok(())
}
