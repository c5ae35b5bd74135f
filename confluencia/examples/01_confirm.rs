mod common;
use confluencia::{Confluencia, ConfluenciaConfig, Symbol};
use common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (mock in CI when CONFLUENCIA_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the orchestrator; the credential comes from ALPHA_VANTAGE_API_KEY.
    let engine = Confluencia::builder()
        .with_connector(connector)
        .config(ConfluenciaConfig::from_env())
        .build()?;

    // 3. Resolve confluence across M1, M5 and M15.
    let symbol = Symbol::new("eurusd")?;
    println!("Resolving confluence for {symbol}...");
    let report = engine.confirm(&symbol).await?;

    // 4. Print the outcome and the full report.
    println!("{} -> {} ({})", report.symbol, report.confirmation, report.rationale);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
