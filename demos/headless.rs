use sentinel_map::{
    core::incident::seed_incidents,
    geocode::pseudo_geocode,
    map::marker::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
    store::{IncidentStore, MemoryStorage, STORAGE_KEY},
    IncidentMap, MapConfig, MapView,
};

/// Example of using the incident map without any UI or network access
fn main() -> sentinel_map::Result<()> {
    env_logger::init();

    println!("🗺️ Sentinel-Map Headless Example");
    println!("================================");

    // In-memory storage keeps the demo self-contained
    let store = IncidentStore::new(Box::new(MemoryStorage::new()), STORAGE_KEY);
    let mut map = IncidentMap::with_store(MapConfig::for_testing(), store);

    map.load();
    println!("✅ Map loaded with {} seed incidents", map.live_count());

    for marker in map.markers() {
        println!(
            "   📍 {} [{}] at {} ({}px dot, anchor {})",
            marker.incident().title,
            marker.incident().level,
            marker.position(),
            MARKER_ICON_SIZE,
            MARKER_ICON_ANCHOR
        );
    }

    match map.view() {
        MapView::Fit { bounds, padding } => {
            println!(
                "\n🎯 Fit view: center {}, span {} (padding {}px)",
                bounds.center(),
                bounds.span(),
                padding
            );
        }
        MapView::Default { center, zoom } => {
            println!("\n🎯 Default view: {} at zoom {}", center, zoom);
        }
    }

    // The pseudo-geocoder maps any text to a stable synthetic coordinate
    println!("\n🔮 Pseudo-geocode samples:");
    for place in ["Atlantis", "Unknown Place XYZ", "Shangri-La"] {
        println!("   {} -> {}", place, pseudo_geocode(place));
    }

    assert_eq!(map.live_count(), seed_incidents().len());
    Ok(())
}
