use super::*;
use crate::balance::Balance;
use crate::catalog::BuildingKind;
use crate::city_state::CityState;
use crate::grid::{CityGrid, PlacementError, TileKind};

#[test]
fn test_game_action_serialization() {
    let action = GameAction::Build {
        kind: BuildingKind::CentralBank,
        x: 3,
        y: 4,
    };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: GameAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);

    let res = ActionResult::Error(ActionError::InsufficientFunds {
        needed: 2000.0,
        available: 10.0,
    });
    let json = serde_json::to_string(&res).unwrap();
    let decoded: ActionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(res, decoded);
}

#[test]
fn test_build_charges_cost_and_applies_effects() {
    let mut grid = CityGrid::default();
    let mut state = CityState::default();
    let balance = Balance::default();

    let result = execute_build(BuildingKind::Factory, 2, 2, &mut grid, &mut state, &balance);
    assert!(matches!(result, ActionResult::Built(_)));
    assert_eq!(state.money, 700.0);
    assert_eq!(state.happiness, 68.0);
    assert_eq!(state.traffic, 2.0);
}

#[test]
fn test_road_adds_oneoff_demand() {
    let mut grid = CityGrid::default();
    let mut state = CityState::default();
    let balance = Balance::default();
    execute_build(BuildingKind::Road, 0, 0, &mut grid, &mut state, &balance);
    assert_eq!(state.money, 980.0);
    assert_eq!(state.traffic, 1.0);
    assert!((state.power_use_once - 0.05).abs() < 1e-12);
    assert!((state.water_use_once - 0.05).abs() < 1e-12);
}

#[test]
fn test_failed_placement_keeps_money() {
    let mut grid = CityGrid::default();
    let mut state = CityState::default();
    let balance = Balance::default();
    execute_build(BuildingKind::Shop, 0, 0, &mut grid, &mut state, &balance);
    let money = state.money;

    let result = execute_build(BuildingKind::Park, 0, 0, &mut grid, &mut state, &balance);
    assert_eq!(
        result,
        ActionResult::Error(ActionError::Placement(PlacementError::Occupied))
    );
    let result = execute_build(BuildingKind::Hospital, 19, 19, &mut grid, &mut state, &balance);
    assert_eq!(
        result,
        ActionResult::Error(ActionError::Placement(PlacementError::OutOfBounds))
    );
    assert_eq!(state.money, money);
    assert_eq!(state.happiness, 70.0);
}

#[test]
fn test_slum_cannot_be_built() {
    let mut grid = CityGrid::default();
    let mut state = CityState::default();
    let result = execute_build(
        BuildingKind::Slum,
        5,
        5,
        &mut grid,
        &mut state,
        &Balance::default(),
    );
    assert_eq!(
        result,
        ActionResult::Error(ActionError::NotBuildable(BuildingKind::Slum))
    );
    assert!(!grid.get(5, 5).is_occupied());
    assert_eq!(grid.count_all(TileKind::Blight), 0);
    assert_eq!(state.money, 1000.0);
    assert_eq!(
        ActionError::NotBuildable(BuildingKind::Slum).to_string(),
        "Slum cannot be built"
    );
}

#[test]
fn test_insufficient_funds_leaves_grid_untouched() {
    let mut grid = CityGrid::default();
    let mut state = CityState {
        money: 50.0,
        ..Default::default()
    };
    let result = execute_build(
        BuildingKind::House,
        0,
        0,
        &mut grid,
        &mut state,
        &Balance::default(),
    );
    assert_eq!(
        result,
        ActionResult::Error(ActionError::InsufficientFunds {
            needed: 100.0,
            available: 50.0
        })
    );
    assert!(!grid.get(0, 0).is_occupied());
}

#[test]
fn test_central_bank_requires_city_hall() {
    let mut grid = CityGrid::default();
    let mut state = CityState {
        money: 5000.0,
        ..Default::default()
    };
    let balance = Balance::default();
    let result = execute_build(BuildingKind::CentralBank, 0, 0, &mut grid, &mut state, &balance);
    assert_eq!(
        result,
        ActionResult::Error(ActionError::MissingPrerequisite(BuildingKind::CityHall))
    );

    execute_build(BuildingKind::CityHall, 0, 0, &mut grid, &mut state, &balance);
    let result = execute_build(BuildingKind::CentralBank, 4, 0, &mut grid, &mut state, &balance);
    assert!(result.is_success());
    assert_eq!(state.money, 5000.0 - 800.0 - 2000.0);
}

#[test]
fn test_action_error_messages() {
    let err = ActionError::MissingPrerequisite(BuildingKind::CityHall);
    assert_eq!(err.to_string(), "requires a City Hall");
    let err: ActionError = PlacementError::Occupied.into();
    assert!(err.to_string().contains("overlaps"));
    assert!(std::error::Error::source(&err).is_some());
}
