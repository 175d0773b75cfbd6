use crate::catalog::BuildingKind;
use crate::test_harness::TestCity;

#[test]
fn speed_scales_simulated_time() {
    let mut city = TestCity::new().with_speed(4);
    let start = city.clock().elapsed_seconds;
    city.tick(1);
    assert_eq!(city.clock().elapsed_seconds - start, 24);
}

#[test]
fn upkeep_is_identical_at_any_speed() {
    // A central bank costs 2 per minute; one simulated hour is 60 minutes.
    let mut slow = TestCity::new().with_building(BuildingKind::CentralBank, 0, 0);
    slow.tick(600);
    assert_eq!(slow.state().money, 880.0);

    let mut fast = TestCity::new()
        .with_building(BuildingKind::CentralBank, 0, 0)
        .with_speed(16);
    // 38 ticks of 96 s end 48 s into the next hour.
    fast.tick(38);
    assert_eq!(fast.state().money, 880.0);
}

#[test]
fn daily_block_runs_once_per_day() {
    let mut city = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_road_row(2, 0, 5)
        .with_building(BuildingKind::House, 4, 3)
        .with_speed(16);
    city.advance_hours(15);
    assert_eq!(city.state().population, 0, "no day boundary crossed yet");
    city.advance_hours(1);
    assert_eq!(city.clock().day(), 2);
    // ceil(10 * 0.10 * 0.70)
    assert_eq!(city.state().population, 1);
}

#[test]
fn oneoff_road_demand_decays_hourly() {
    let mut city = TestCity::new().with_speed(16);
    city.act(crate::game_actions::GameAction::Build {
        kind: BuildingKind::Road,
        x: 0,
        y: 0,
    });
    let fresh = city.state().power_use_once;
    assert!((fresh - 0.05).abs() < 1e-12);
    city.advance_days(1);
    let after = city.state().power_use_once;
    assert!(after < fresh * 0.65 && after > fresh * 0.55, "{after}");
}
