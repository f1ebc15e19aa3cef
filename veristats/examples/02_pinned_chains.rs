mod common;
use common::get_connector;
use veristats::{ChainId, Veristats};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();

    // Pin Optimism and Polygon right behind the selection, regardless of
    // their verification counts, and keep the chart to five rows.
    let veristats = Veristats::builder()
        .with_connector(connector)
        .pin_chains(&[ChainId::new(10), ChainId::new(137)])
        .top_chains(5)
        .build()?;

    // Simulate a user clicking through selections; the selection is ours to
    // hold, the orchestrator stays stateless.
    for selected in [None, Some(ChainId::new(137))] {
        let report = veristats.chart(selected).await?;
        println!(
            "selected chain {} ({} verified):",
            report.chart.selected,
            report.chart.selected_total
        );
        for row in &report.chart.rows {
            println!(
                "  {:>10}  {}",
                row.total,
                row.label.as_deref().unwrap_or("(unknown chain)")
            );
        }
    }

    Ok(())
}
