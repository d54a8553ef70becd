use sentinel_map::{IncidentMap, IncidentReport, MapConfig, MapView};

/// Submits an emergency report from the command line and prints the
/// resulting priority card and map state.
///
/// Usage: report_cli [location] [disaster_type] [urgency] [message]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let report = IncidentReport {
        name: String::new(),
        location: args.next().unwrap_or_else(|| "Manila, Philippines".to_string()),
        disaster_type: args.next().unwrap_or_else(|| "flood".to_string()),
        urgency: args.next().unwrap_or_else(|| "high".to_string()),
        message: args
            .next()
            .unwrap_or_else(|| "Water rising fast near the river district".to_string()),
    };

    let mut map = IncidentMap::new(MapConfig::default());
    map.load();
    println!("🗺️ {} incidents on the map", map.live_count());

    let submission = map.submit(&report).await?;
    println!("\n🚨 Report mapped");
    println!("   Title:    {}", submission.incident.title);
    println!("   Level:    {}", submission.incident.level);
    println!("   Coords:   {}", submission.incident.coords);
    println!("   Priority: {}/100", submission.score);

    match map.view() {
        MapView::Fit { bounds, .. } => {
            println!("\n🎯 View fitted to {} markers, center {}", map.live_count(), bounds.center());
        }
        MapView::Default { center, zoom } => {
            println!("\n🎯 Default view: {} at zoom {}", center, zoom);
        }
    }

    Ok(())
}
