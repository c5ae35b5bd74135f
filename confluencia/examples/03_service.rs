mod common;
use std::sync::Arc;

use confluencia::{ApiService, Confluencia, ResolveStrategy};
use common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,confluencia=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let engine = Confluencia::builder()
        .with_connector(get_connector())
        .resolve_strategy(ResolveStrategy::Sequential)
        .build()?;
    let service = ApiService::new(Arc::new(engine));

    for target in [
        "/health",
        "/analisis?tf=5min",
        "/analisis/USDJPY?tf=15min",
        "/analisis/confirmacion?symbol=GBPUSD",
        "/analisis?tf=2min",
    ] {
        let res = service.get(target).await;
        println!("GET {target} -> {}\n{:#}", res.status, res.body);
    }

    Ok(())
}
