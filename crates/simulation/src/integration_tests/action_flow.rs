use crate::catalog::BuildingKind;
use crate::game_actions::{ActionError, ActionResult, GameAction};
use crate::grid::PlacementError;
use crate::test_harness::TestCity;

fn build(kind: BuildingKind, x: usize, y: usize) -> GameAction {
    GameAction::Build { kind, x, y }
}

#[test]
fn queued_build_is_charged() {
    let mut city = TestCity::new();
    let result = city.act(build(BuildingKind::House, 0, 0));
    assert!(matches!(result, ActionResult::Built(_)));
    assert_eq!(city.state().money, 900.0);
    assert!(city.grid().get(0, 0).is_root());
}

#[test]
fn connectivity_follows_builds_in_the_same_tick() {
    let mut city = TestCity::new()
        .with_money(5000.0)
        .with_building(BuildingKind::CityHall, 0, 0);
    city.act(build(BuildingKind::Road, 3, 0));
    city.act(build(BuildingKind::Shop, 4, 0));
    city.assert_connected(4, 0);
    city.assert_connected(0, 0);
    assert!(city.connectivity().roads.contains(&(3, 0)));
}

#[test]
fn demolishing_the_road_disconnects_the_shop() {
    let mut city = TestCity::new()
        .with_building(BuildingKind::CityHall, 0, 0)
        .with_building(BuildingKind::Road, 3, 0)
        .with_building(BuildingKind::Shop, 4, 0);
    city.tick(1);
    city.assert_connected(4, 0);
    let road = city.grid().get(3, 0).group_id().unwrap();
    let money = city.state().money;

    let result = city.act(GameAction::Demolish { x: 3, y: 0 });
    assert_eq!(result, ActionResult::Demolished(road));
    city.assert_not_connected(4, 0);
    assert!(city.connectivity().roads.is_empty());
    assert_eq!(city.state().money, money, "demolition is never refunded");
}

#[test]
fn demolishing_a_multi_cell_building_from_any_cell() {
    let mut city = TestCity::new().with_building(BuildingKind::University, 5, 5);
    let gid = city.grid().get(5, 5).group_id().unwrap();
    let result = city.act(GameAction::Demolish { x: 7, y: 6 });
    assert_eq!(result, ActionResult::Demolished(gid));
    assert!(city.grid().group_cells(gid).is_empty());
}

#[test]
fn demolishing_empty_ground_warns() {
    let mut city = TestCity::new();
    let result = city.act(GameAction::Demolish { x: 2, y: 2 });
    assert!(result.is_success());
    assert!(result.warning().is_some());
    let result = city.act(GameAction::Demolish { x: 200, y: 2 });
    assert!(result.warning().is_some());
}

#[test]
fn rejected_builds_are_logged_with_reasons() {
    let mut city = TestCity::new().with_money(5000.0);
    assert_eq!(
        city.act(build(BuildingKind::CentralBank, 0, 0)),
        ActionResult::Error(ActionError::MissingPrerequisite(BuildingKind::CityHall))
    );
    assert_eq!(
        city.act(build(BuildingKind::CityHall, 18, 18)),
        ActionResult::Error(ActionError::Placement(PlacementError::OutOfBounds))
    );
    assert_eq!(city.state().money, 5000.0);
    assert_eq!(city.log().len(), 2);
}

#[test]
fn scripted_slum_is_rejected() {
    let mut city = TestCity::new();
    let result = city.act(build(BuildingKind::Slum, 5, 5));
    assert_eq!(
        result,
        ActionResult::Error(ActionError::NotBuildable(BuildingKind::Slum))
    );
    assert!(!city.grid().get(5, 5).is_occupied());
    assert_eq!(city.state().money, 1000.0);
}

#[test]
fn insufficient_funds_places_nothing() {
    let mut city = TestCity::new().with_money(10.0);
    let result = city.act(build(BuildingKind::Hospital, 0, 0));
    assert!(matches!(
        result.error(),
        Some(ActionError::InsufficientFunds { .. })
    ));
    assert!(!city.grid().get(0, 0).is_occupied());
}

#[test]
fn withdraw_respects_cooldown() {
    let mut city = TestCity::new().with_state(|s| s.treasury_pending = 100.0);
    assert_eq!(city.act(GameAction::Withdraw), ActionResult::Withdrawn(100.0));
    assert_eq!(city.state().money, 1100.0);

    city.world_mut()
        .resource_mut::<crate::city_state::CityState>()
        .treasury_pending = 60.0;
    let result = city.act(GameAction::Withdraw);
    assert_eq!(
        result,
        ActionResult::Error(ActionError::Withdraw(
            crate::economy::WithdrawError::CoolingDown { remaining: 24 }
        ))
    );

    city.tick(4);
    assert_eq!(city.act(GameAction::Withdraw), ActionResult::Withdrawn(60.0));
}

#[test]
fn pause_freezes_the_clock() {
    let mut city = TestCity::new();
    city.act(GameAction::SetPaused { paused: true });
    let frozen = city.clock().elapsed_seconds;
    city.tick(10);
    assert_eq!(city.clock().elapsed_seconds, frozen);

    // The clock steps before actions apply, so the unpausing tick is still frozen.
    city.act(GameAction::SetPaused { paused: false });
    assert_eq!(city.clock().elapsed_seconds, frozen);
    city.tick(1);
    assert!(city.clock().elapsed_seconds > frozen);
}

#[test]
fn speed_is_clamped() {
    let mut city = TestCity::new();
    let result = city.act(GameAction::SetSpeed { speed: 99 });
    assert!(result.warning().is_some());
    assert_eq!(city.clock().speed, 16);
    assert_eq!(city.act(GameAction::SetSpeed { speed: 2 }), ActionResult::Success);
}

#[test]
fn auto_tax_toggle() {
    let mut city = TestCity::new();
    city.act(GameAction::SetAutoTax { enabled: true });
    assert!(city.ledger().auto_tax);
}
