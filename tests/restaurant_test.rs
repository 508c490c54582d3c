use chrono::NaiveTime;
use restaurant_finder::clock::FixedClock;
use restaurant_finder::model::{MenuItem, Restaurant};
use restaurant_finder::restaurant::MenuError;

fn time(s: &str) -> NaiveTime {
    s.parse().unwrap()
}

/// Amelie's cafe, open 10:30-22:00, with soup and lasagne on the menu.
fn setup() -> Restaurant {
    let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", time("10:30:00"), time("22:00:00"));
    restaurant.add_to_menu("Sweet corn soup", 119).unwrap();
    restaurant.add_to_menu("Vegetable lasagne", 269).unwrap();
    restaurant
}

// --- Open / closed ---

#[test]
fn is_restaurant_open_should_return_true_if_time_is_between_opening_and_closing_time() {
    let restaurant = setup();
    let clock = FixedClock::new(time("12:00:00"));
    assert!(restaurant.is_restaurant_open(&clock));
}

#[test]
fn is_restaurant_open_should_return_false_if_time_is_outside_opening_and_closing_time() {
    let restaurant = setup();
    let clock = FixedClock::new(time("09:00:00"));
    assert!(!restaurant.is_restaurant_open(&clock));
}

#[test]
fn is_restaurant_open_should_return_false_at_closing_time() {
    let restaurant = setup();
    let clock = FixedClock::new(time("22:00:00"));
    assert!(!restaurant.is_restaurant_open(&clock));

    clock.set(time("10:30:00"));
    assert!(restaurant.is_restaurant_open(&clock));
}

// --- Menu ---

#[test]
fn adding_item_to_menu_should_increase_menu_size_by_1() {
    let mut restaurant = setup();
    let initial = restaurant.menu().len();
    restaurant.add_to_menu("Sizzling brownie", 319).unwrap();

    assert_eq!(restaurant.menu().len(), initial + 1);
    assert_eq!(restaurant.menu()[initial], MenuItem::new("Sizzling brownie", 319));
}

#[test]
fn removing_item_from_menu_should_decrease_menu_size_by_1() {
    let mut restaurant = setup();
    let initial = restaurant.menu().len();
    restaurant.remove_from_menu("Vegetable lasagne").unwrap();

    assert_eq!(restaurant.menu().len(), initial - 1);
    assert!(restaurant.item("Vegetable lasagne").is_none());
}

#[test]
fn removing_item_that_does_not_exist_should_fail_and_leave_menu_unchanged() {
    let mut restaurant = setup();
    let before = restaurant.menu().to_vec();

    let result = restaurant.remove_from_menu("French fries");

    assert_eq!(result, Err(MenuError::ItemNotFound("French fries".to_string())));
    assert_eq!(restaurant.menu(), before.as_slice());
}

#[test]
fn menu_copies_do_not_affect_the_restaurant() {
    let restaurant = setup();
    let mut copy = restaurant.menu().to_vec();
    copy.clear();
    assert_eq!(restaurant.menu().len(), 2);
}

// --- Order value ---

#[test]
fn calculate_items_cost_of_selected_items_should_return_cost_269() {
    let restaurant = setup();
    let items = vec!["Vegetable lasagne".to_string()];
    let total = restaurant.calculate_items_cost(&items);
    assert!(total > 0);
    assert_eq!(total, 269);
}

#[test]
fn calculate_items_cost_on_selecting_new_item_should_return_cost_388() {
    let restaurant = setup();
    let items = ["Vegetable lasagne", "Sweet corn soup"];
    assert_eq!(restaurant.calculate_items_cost(&items), 388);
}

#[test]
fn calculate_items_cost_on_unselecting_item_should_return_cost_119() {
    let restaurant = setup();
    let mut items = vec!["Vegetable lasagne", "Sweet corn soup"];
    items.retain(|name| *name != "Vegetable lasagne");
    assert_eq!(restaurant.calculate_items_cost(&items), 119);
}

#[test]
fn calculate_items_cost_with_no_items_selected_should_return_cost_0() {
    let restaurant = setup();
    let items: Vec<String> = Vec::new();
    assert_eq!(restaurant.calculate_items_cost(&items), 0);
}

#[test]
fn calculate_items_cost_is_order_independent_and_additive() {
    let restaurant = setup();
    let soup = restaurant.calculate_items_cost(&["Sweet corn soup"]);
    let lasagne = restaurant.calculate_items_cost(&["Vegetable lasagne"]);

    assert_eq!(
        restaurant.calculate_items_cost(&["Sweet corn soup", "Vegetable lasagne"]),
        soup + lasagne
    );
    assert_eq!(
        restaurant.calculate_items_cost(&["Vegetable lasagne", "Sweet corn soup"]),
        soup + lasagne
    );
}

#[test]
fn menu_items_render_as_name_and_price() {
    let restaurant = setup();
    let rendered: Vec<String> = restaurant.menu().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Sweet corn soup:119", "Vegetable lasagne:269"]);
}
