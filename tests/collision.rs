use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use pretty_assertions::assert_eq;
use runner::events::{GameCommand, GameEvent};
use runner::systems::{collision_system, overlaps, stage_system, GameStage, Renderable, SessionState};
use speculoos::prelude::*;

mod common;

const SIZE: Vec2 = Vec2::new(10.0, 10.0);

#[test]
fn test_touching_edges_do_not_overlap() {
    let origin = Vec2::ZERO;

    assert_that(&overlaps(origin, SIZE, Vec2::new(10.0, 0.0), SIZE)).is_false();
    assert_that(&overlaps(origin, SIZE, Vec2::new(-10.0, 0.0), SIZE)).is_false();
    assert_that(&overlaps(origin, SIZE, Vec2::new(0.0, 10.0), SIZE)).is_false();
    assert_that(&overlaps(origin, SIZE, Vec2::new(0.0, -10.0), SIZE)).is_false();
    assert_that(&overlaps(origin, SIZE, Vec2::new(10.0, 10.0), SIZE)).is_false();
}

#[test]
fn test_overlap_needs_both_axes() {
    let origin = Vec2::ZERO;

    assert_that(&overlaps(origin, SIZE, Vec2::new(9.5, 9.5), SIZE)).is_true();
    // Overlapping on x only
    assert_that(&overlaps(origin, SIZE, Vec2::new(5.0, 20.0), SIZE)).is_false();
    // Overlapping on y only
    assert_that(&overlaps(origin, SIZE, Vec2::new(20.0, 5.0), SIZE)).is_false();
}

#[test]
fn test_overlap_matches_interval_test_and_is_symmetric() {
    let boxes = [
        (Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)),
        (Vec2::new(5.0, 5.0), Vec2::new(2.0, 2.0)),
        (Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0)),
        (Vec2::new(-3.0, 8.0), Vec2::new(4.0, 4.0)),
        (Vec2::new(500.0, 570.0), Vec2::new(50.0, 50.0)),
        (Vec2::new(549.0, 570.0), Vec2::new(30.0, 50.0)),
        (Vec2::new(550.0, 570.0), Vec2::new(30.0, 50.0)),
    ];

    let intervals = |a: f32, a_len: f32, b: f32, b_len: f32| a < b + b_len && b < a + a_len;

    for (a_pos, a_size) in boxes {
        for (b_pos, b_size) in boxes {
            let expected =
                intervals(a_pos.x, a_size.x, b_pos.x, b_size.x) && intervals(a_pos.y, a_size.y, b_pos.y, b_size.y);
            assert_eq!(overlaps(a_pos, a_size, b_pos, b_size), expected);
            assert_eq!(overlaps(a_pos, a_size, b_pos, b_size), overlaps(b_pos, b_size, a_pos, a_size));
        }
    }
}

#[test]
fn test_collision_system_reports_overlapping_obstacle() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world);
    let obstacle = common::spawn_test_obstacle(&mut world, Vec2::new(520.0, common::GROUND_LINE));

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_eq!(common::collisions(&world), vec![GameEvent::Collision(player, obstacle)]);
}

#[test]
fn test_collision_system_reports_only_the_first_hit() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::spawn_test_obstacle(&mut world, Vec2::new(510.0, common::GROUND_LINE));
    common::spawn_test_obstacle(&mut world, Vec2::new(530.0, common::GROUND_LINE));

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_that(&common::collisions(&world)).has_length(1);
}

#[test]
fn test_collision_system_ignores_touching_obstacle() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    // Player spans x 500..550
    common::spawn_test_obstacle(&mut world, Vec2::new(550.0, common::GROUND_LINE));
    common::spawn_test_obstacle(&mut world, Vec2::new(470.0, common::GROUND_LINE));

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_that(&common::collisions(&world)).is_empty();
}

#[test]
fn test_player_without_renderable_never_collides() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world);
    world.entity_mut(player).remove::<Renderable>();
    common::spawn_test_obstacle(&mut world, Vec2::new(520.0, common::GROUND_LINE));

    world
        .run_system_once(collision_system)
        .expect("System should run successfully");

    assert_that(&common::collisions(&world)).is_empty();
}

#[test]
fn test_stage_system_ends_game_with_current_score() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world);
    let obstacle = common::spawn_test_obstacle(&mut world, Vec2::new(520.0, common::GROUND_LINE));
    world.resource_mut::<SessionState>().score = 42;
    common::send_collision_event(&mut world, player, obstacle);

    world.run_system_once(stage_system).expect("System should run successfully");

    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver { final_score: 42 });
}

#[test]
fn test_stage_system_ignores_commands() {
    let mut world = common::create_test_world();
    common::send_command(&mut world, GameCommand::Jump);

    world.run_system_once(stage_system).expect("System should run successfully");

    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);
}

#[test]
fn test_obstacle_reaching_player_ends_the_game() {
    let mut game = common::create_test_game();

    let mut ticks = 0;
    while game.stage() == GameStage::Playing && ticks < 3000 {
        game.tick(common::ONE_MS);
        ticks += 1;
    }

    let final_score = game.score();
    assert_eq!(game.stage(), GameStage::GameOver { final_score });
    // First obstacle appears at 2000 ms and needs well under a thousand ticks to arrive
    assert_that(&final_score).is_greater_than(2000);
    assert_that(&final_score).is_less_than(3000);

    // The simulation is frozen from here on
    common::tick_n(&mut game, 100, common::ONE_MS);
    assert_eq!(game.score(), final_score);
    assert_eq!(game.stage(), GameStage::GameOver { final_score });
    assert_eq!(game.spawned(), 1);
}

#[test]
fn test_jumping_clears_an_obstacle() {
    let mut game = common::create_test_game();
    common::tick_n(&mut game, 2000, common::ONE_MS);
    assert_eq!(game.spawned(), 1);

    // The obstacle reaches the player's right edge ~146 ticks after spawning and
    // clears it ~15 ticks later; take off early enough to be above it throughout.
    common::tick_n(&mut game, 130, common::ONE_MS);
    game.send(GameCommand::Jump);
    common::tick_n(&mut game, 41, common::ONE_MS);

    assert_eq!(game.stage(), GameStage::Playing);
}
