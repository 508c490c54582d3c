use chrono::NaiveTime;
use restaurant_finder::clock::SystemClock;
use restaurant_finder::config::CatalogConfig;
use restaurant_finder::directory::RestaurantDirectory;
use restaurant_finder::error::CatalogError;
use restaurant_finder::lifecycle::setup_tracing;
use tracing::{error, info, info_span};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting restaurant finder");

    let directory = {
        let _span = info_span!("setup").entered();
        let loaded = match std::env::args().nth(1) {
            Some(path) => {
                info!(%path, "Loading catalog from config");
                CatalogConfig::load(&path)
                    .map_err(CatalogError::from)
                    .and_then(|config| RestaurantDirectory::from_config(&config))
            }
            None => demo_directory(),
        };
        loaded.map_err(|e| e.to_string())?
    };

    let clock = SystemClock;
    for restaurant in directory.restaurants() {
        let _span = info_span!("restaurant", name = %restaurant.name()).entered();
        info!(
            location = %restaurant.location(),
            opening = %restaurant.opening_time(),
            closing = %restaurant.closing_time(),
            open = restaurant.is_restaurant_open(&clock),
            items = restaurant.menu().len(),
            "Listing"
        );
        for item in restaurant.menu() {
            info!(%item, "Menu item");
        }
    }

    let _span = info_span!("order").entered();
    match directory.find_restaurant_by_name("Amelie's cafe") {
        Ok(cafe) => {
            let total = cafe.calculate_items_cost(&["Vegetable lasagne", "Sweet corn soup"]);
            info!(restaurant = %cafe.name(), total, "Order priced");
        }
        Err(e) => error!(error = %e, "Order skipped"),
    }

    let open = directory.open_restaurants(&clock);
    info!(open = open.len(), total = directory.len(), "Application completed successfully");
    Ok(())
}

fn demo_directory() -> Result<RestaurantDirectory, CatalogError> {
    let mut directory = RestaurantDirectory::new();

    let cafe = directory.add_restaurant("Amelie's cafe", "Chennai", time(10, 30)?, time(22, 0)?)?;
    cafe.add_to_menu("Sweet corn soup", 119)?;
    cafe.add_to_menu("Vegetable lasagne", 269)?;

    let tales = directory.add_restaurant("Pumpkin Tales", "Chennai", time(12, 0)?, time(23, 0)?)?;
    tales.add_to_menu("Sizzling brownie", 319)?;

    Ok(directory)
}

fn time(hour: u32, minute: u32) -> Result<NaiveTime, CatalogError> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| CatalogError::InvalidTime(format!("{hour:02}:{minute:02}")))
}
