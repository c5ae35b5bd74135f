mod common;
use confluencia::{Confluencia, Symbol, Timeframe};
use common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Confluencia::builder()
        .with_connector(get_connector())
        .build()?;

    let symbol = Symbol::new("GBPUSD")?;
    for tf in Timeframe::ALL {
        // Raw verdict, exactly as the Analysis Port returned it.
        let verdict = engine.analyze(&symbol, tf).await?;
        println!("{symbol} {tf}: {}", serde_json::to_string(&verdict)?);
    }

    Ok(())
}
