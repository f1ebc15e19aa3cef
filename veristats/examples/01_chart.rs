mod common;
use common::get_connector;
use veristats::Veristats;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Create connector (mock in CI when VERISTATS_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the orchestrator and register the connector.
    let veristats = Veristats::builder().with_connector(connector).build()?;

    // 3. Fetch the chart with the default selection (Ethereum).
    let report = veristats.chart(None).await?;

    // 4. Print the result the way a renderer would consume it.
    println!(
        "{} contracts verified so far (stats via {}, chains via {})",
        report.chart.grand_total,
        report.stats_source.as_str(),
        report.chains_source.as_str(),
    );
    let axis_max = veristats::rounded_ceiling(report.chart.max_total());
    println!("value axis: 0..={axis_max}");
    for row in &report.chart.rows {
        println!(
            "{:>10}  {:>10}  {}",
            row.full_match,
            row.partial_match,
            row.label.as_deref().unwrap_or("(unknown chain)"),
        );
    }

    Ok(())
}
