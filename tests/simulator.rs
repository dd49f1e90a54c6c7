// tests/simulator.rs
use glam::IVec2;
use toy_robot::{Direction, RobotError, RobotSimulator, RobotState, Rotation};

fn setup(x: i32, y: i32, direction: Direction) -> RobotSimulator {
    let mut sim = RobotSimulator::new();
    sim.place(x, y, Some(direction)).unwrap();
    sim
}

#[test]
fn test_place_and_report_every_cell() {
    for x in 0..5 {
        for y in 0..5 {
            for direction in Direction::ALL {
                let mut sim = setup(x, y, direction);
                assert!(sim.is_placed());
                let expected = format!("{x}, {y}, {direction}");
                assert_eq!(sim.report().unwrap(), expected);
                assert_eq!(sim.last_report(), expected);
            }
        }
    }
}

#[test]
fn test_invalid_placement_leaves_robot_unplaced() {
    let mut sim = RobotSimulator::new();
    let cases = [
        (-1, 0, Some(Direction::North)),
        (0, -4, Some(Direction::East)),
        (5, 2, Some(Direction::South)),
        (2, 5, Some(Direction::West)),
        (1, 2, None),
    ];

    for (x, y, direction) in cases {
        assert_eq!(
            sim.place(x, y, direction),
            Err(RobotError::InvalidPlacement { x, y, direction })
        );
        assert!(!sim.is_placed());
        assert_eq!(sim.state(), &RobotState::default());
    }
}

#[test]
fn test_place_appends_log_entry() {
    let sim = setup(0, 0, Direction::East);
    assert_eq!(sim.command_log(), ["PLACE 0, 0, EAST"]);
}

#[test]
fn test_rotation_is_a_four_cycle() {
    for start in Direction::ALL {
        for rotation in [Rotation::Left, Rotation::Right] {
            let mut sim = setup(2, 2, start);
            for _ in 0..4 {
                sim.rotate(rotation).unwrap();
            }
            assert_eq!(sim.direction(), Some(start));
            assert_eq!(sim.command_log().len(), 5);
        }
    }
}

#[test]
fn test_rotation_wraps_at_ends_of_cycle() {
    let mut sim = setup(0, 0, Direction::North);
    assert_eq!(sim.rotate(Rotation::Left), Ok(Direction::West));
    assert_eq!(sim.rotate(Rotation::Right), Ok(Direction::North));

    let mut sim = setup(0, 0, Direction::West);
    assert_eq!(sim.rotate(Rotation::Right), Ok(Direction::North));

    let mut sim = setup(0, 0, Direction::East);
    assert_eq!(sim.rotate(Rotation::Right), Ok(Direction::South));
    assert_eq!(sim.command_log(), ["PLACE 0, 0, EAST", "RIGHT"]);
}

#[test]
fn test_unplaced_operations_are_rejected_without_mutation() {
    let mut sim = RobotSimulator::new();

    assert_eq!(sim.rotate(Rotation::Left), Err(RobotError::NotPlaced));
    assert_eq!(sim.rotate(Rotation::Right), Err(RobotError::NotPlaced));
    assert_eq!(sim.move_forward(), Err(RobotError::NotPlaced));
    assert_eq!(sim.report(), Err(RobotError::NotPlaced));

    assert_eq!(sim.state(), &RobotState::default());
}

#[test]
fn test_edge_moves_are_rejected() {
    let edges = [
        (4, 4, Direction::North),
        (4, 2, Direction::East),
        (3, 0, Direction::South),
        (0, 1, Direction::West),
    ];

    for (x, y, direction) in edges {
        let mut sim = setup(x, y, direction);
        let before = sim.state().clone();

        assert_eq!(
            sim.move_forward(),
            Err(RobotError::FallOffRejected {
                position: IVec2::new(x, y),
                direction
            })
        );
        assert_eq!(sim.state(), &before);
        assert_eq!(sim.position(), Some(IVec2::new(x, y)));
    }
}

#[test]
fn test_moves_onto_edge_cells_succeed() {
    let mut sim = setup(3, 0, Direction::East);
    assert_eq!(sim.move_forward(), Ok(IVec2::new(4, 0)));

    let mut sim = setup(1, 0, Direction::West);
    assert_eq!(sim.move_forward(), Ok(IVec2::new(0, 0)));

    let mut sim = setup(0, 3, Direction::North);
    assert_eq!(sim.move_forward(), Ok(IVec2::new(0, 4)));

    let mut sim = setup(0, 1, Direction::South);
    assert_eq!(sim.move_forward(), Ok(IVec2::new(0, 0)));
}

#[test]
fn test_interior_move() {
    let mut sim = setup(2, 2, Direction::East);
    sim.move_forward().unwrap();

    assert_eq!(sim.position(), Some(IVec2::new(3, 2)));
    assert_eq!(sim.command_log().last().map(String::as_str), Some("MOVE"));
}

#[test]
fn test_walk_into_wall_then_turn_away() {
    let mut sim = setup(3, 3, Direction::North);
    sim.move_forward().unwrap();
    assert!(sim.move_forward().is_err());
    assert!(sim.move_forward().is_err());
    sim.rotate(Rotation::Left).unwrap();
    sim.move_forward().unwrap();

    assert_eq!(sim.report().unwrap(), "2, 4, WEST");
    assert_eq!(
        sim.command_log(),
        ["PLACE 3, 3, NORTH", "MOVE", "LEFT", "MOVE"]
    );
}

#[test]
fn test_report_does_not_touch_log() {
    let mut sim = setup(1, 1, Direction::South);
    sim.report().unwrap();
    sim.report().unwrap();
    assert_eq!(sim.command_log().len(), 1);
}

#[test]
fn test_full_scenario_and_reset() {
    let mut sim = RobotSimulator::new();
    sim.place(0, 0, Some(Direction::North)).unwrap();
    assert_eq!(sim.rotate(Rotation::Right), Ok(Direction::East));
    assert_eq!(sim.move_forward(), Ok(IVec2::new(1, 0)));
    assert_eq!(sim.report().unwrap(), "1, 0, EAST");
    assert_eq!(
        sim.command_log(),
        ["PLACE 0, 0, NORTH", "RIGHT", "MOVE"]
    );

    sim.reset();
    assert_eq!(sim.state(), RobotSimulator::new().state());
    assert!(!sim.is_placed());
    assert!(sim.command_log().is_empty());
    assert!(sim.last_report().is_empty());
    assert_eq!(sim.position(), None);
    assert_eq!(sim.direction(), None);

    // Same sequence after a reset behaves like a fresh simulator.
    sim.place(0, 0, Some(Direction::North)).unwrap();
    sim.rotate(Rotation::Right).unwrap();
    sim.move_forward().unwrap();
    assert_eq!(sim.report().unwrap(), "1, 0, EAST");
}

#[test]
fn test_reset_on_fresh_simulator() {
    let mut sim = RobotSimulator::new();
    sim.reset();
    assert_eq!(sim.state(), &RobotState::default());
}

#[test]
fn test_replacing_appends_second_place() {
    let mut sim = setup(0, 0, Direction::North);
    sim.place(4, 4, Some(Direction::South)).unwrap();
    assert_eq!(sim.report().unwrap(), "4, 4, SOUTH");
    assert_eq!(
        sim.command_log(),
        ["PLACE 0, 0, NORTH", "PLACE 4, 4, SOUTH"]
    );
}

#[test]
fn test_state_stays_consistent() {
    let mut sim = setup(0, 0, Direction::South);
    let _ = sim.move_forward();
    let _ = sim.place(9, 9, Some(Direction::North));
    sim.rotate(Rotation::Left).unwrap();
    sim.move_forward().unwrap();
    assert!(sim.state().is_consistent());
    assert!(RobotError::NotPlaced.is_recoverable());
}
