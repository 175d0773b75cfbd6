use crate::catalog::BuildingKind;
use crate::game_actions::GameAction;
use crate::grid::TileKind;
use crate::test_harness::TestCity;

#[test]
fn starter_town_settles_and_studies() {
    let mut city = TestCity::with_starter_town()
        .with_auto_tax(true)
        .with_speed(16);
    city.advance_days(3);

    let state = city.state();
    assert!(state.population > 0);
    assert!(state.pop_adult > 0);
    assert!(state.literacy > 0.0, "a connected university raises literacy");
    assert!(city.labor().total_jobs() > 0);
    city.assert_indicators_in_range();
}

#[test]
fn starter_town_upkeep_drains_money() {
    let mut city = TestCity::with_starter_town().with_speed(16);
    let start = city.state().money;
    city.advance_hours(2);
    city.assert_money_below(start);
}

#[test]
fn starter_town_power_and_water_are_served() {
    let mut city = TestCity::with_starter_town();
    city.tick(1);
    let state = city.state();
    assert_eq!(state.power_cap, 50.0);
    assert_eq!(state.water_cap, 50.0);
    assert!(state.power_pct > 0.0 && state.power_pct <= 100.0);
}

#[test]
fn demolishing_the_city_hall_disconnects_everything() {
    let mut city = TestCity::with_starter_town();
    city.tick(1);
    assert!(!city.connectivity().groups.is_empty());

    city.act(GameAction::Demolish { x: 1, y: 1 });
    assert!(city.connectivity().groups.is_empty());
    assert!(city.connectivity().roads.is_empty());
    assert_eq!(city.state().treasury_cap, 0.0);
    assert_eq!(city.labor().total_jobs(), 0);
}

#[test]
fn parks_offset_unhappiness() {
    let mut with_parks = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_road_row(2, 0, 6)
        .with_building(BuildingKind::Park, 4, 3)
        .with_building(BuildingKind::Park, 5, 3)
        .with_speed(16);
    let mut without = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_road_row(2, 0, 6)
        .with_speed(16);
    with_parks.advance_days(1);
    without.advance_days(1);
    assert!(with_parks.state().happiness > without.state().happiness);
}

#[test]
fn factory_pollution_hurts_health() {
    let mut city = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_road_row(2, 0, 8)
        .with_building(BuildingKind::Factory, 4, 3)
        .with_building(BuildingKind::Factory, 5, 3)
        .with_building(BuildingKind::Factory, 6, 3)
        .with_speed(16);
    city.advance_hours(6);
    assert!(city.state().pollution_penalty > 0.0);
    assert!(city.state().health < 80.0);
    assert_eq!(
        city.grid()
            .count_connected(&city.connectivity().groups, TileKind::Industrial),
        3
    );
}

#[test]
fn withdrawn_income_reaches_the_treasury() {
    let mut city = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_road_row(2, 0, 8)
        .with_building(BuildingKind::House, 4, 3)
        .with_building(BuildingKind::House, 5, 3)
        .with_building(BuildingKind::Shop, 6, 3)
        .with_building(BuildingKind::Factory, 7, 3)
        .with_state(|s| s.set_population(20, 0.6, 0.15))
        .with_speed(16);
    city.advance_hours(4);
    let pending = city.state().treasury_pending;
    assert!(pending > 0.0);
    assert!(pending <= city.state().treasury_cap);

    if pending >= 50.0 {
        let money = city.state().money;
        assert!(city.act(GameAction::Withdraw).is_success());
        city.assert_money_above(money);
    }
}
