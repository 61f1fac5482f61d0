//! Tick engine tests: normal steps, growth, every collision flavor,
//! in-tick ordering effects, and dead-snake inertness.

use snakesim_core::{
    board::Board,
    cell::{Cell, Direction},
    engine::GameEngine,
    event::GameEvent,
    locator::trace_path,
    spawn::{FixedFruitSpawner, NoFruitSpawner, RandomFruitSpawner},
    state::GameState,
    types::Pos,
};

fn engine_from(text: &str) -> GameEngine {
    let board = Board::parse(text).unwrap();
    GameEngine::new(GameState::from_board(board).unwrap())
}

#[test]
fn normal_step_moves_head_and_tail() {
    let mut engine = GameEngine::new(GameState::default_board());
    let mut spawner = NoFruitSpawner;
    let events = engine.tick(&mut spawner).unwrap();

    let snake = engine.state.snakes[0];
    assert!(snake.alive);
    assert_eq!(snake.head, Pos::new(2, 5));
    assert_eq!(snake.tail, Pos::new(2, 3));

    let board = &engine.state.board;
    assert_eq!(board.get(Pos::new(2, 2)).unwrap(), Cell::Empty);
    assert_eq!(board.get(Pos::new(2, 3)).unwrap(), Cell::Tail(Direction::Right));
    assert_eq!(board.get(Pos::new(2, 4)).unwrap(), Cell::Body(Direction::Right));
    assert_eq!(board.get(Pos::new(2, 5)).unwrap(), Cell::Head(Direction::Right));

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::SnakeMoved { snake: 0, .. })));
}

#[test]
fn growth_on_fruit_extends_path_and_asks_for_more() {
    let mut engine = GameEngine::new(GameState::default_board());
    let mut spawner = FixedFruitSpawner::new([Pos::new(4, 4)]);

    // Four normal steps: head ends one cell short of the fruit.
    let events = engine.run_ticks(4, &mut spawner).unwrap();
    assert!(events
        .iter()
        .all(|e| !matches!(e, GameEvent::SnakeGrew { .. })));
    assert_eq!(engine.state.snakes[0].head, Pos::new(2, 8));
    assert_eq!(engine.state.snakes[0].tail, Pos::new(2, 6));

    // Fifth tick: destination is the fruit at (2,9).
    let events = engine.tick(&mut spawner).unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::SnakeGrew { snake: 0, .. })));
    assert!(events.iter().any(
        |e| matches!(e, GameEvent::FruitSpawned { at, .. } if *at == Pos::new(4, 4))
    ));

    let snake = engine.state.snakes[0];
    assert_eq!(snake.head, Pos::new(2, 9));
    assert_eq!(snake.tail, Pos::new(2, 6), "tail must not advance on growth");
    assert_eq!(
        engine.state.board.get(Pos::new(2, 8)).unwrap(),
        Cell::Body(Direction::Right),
        "old head cell becomes a body cell"
    );

    let (head, len) = trace_path(&engine.state.board, snake.tail).unwrap();
    assert_eq!(head, Pos::new(2, 9));
    assert_eq!(len, 4, "length grows from 3 to 4");

    assert_eq!(
        engine.state.board.get(Pos::new(4, 4)).unwrap(),
        Cell::Fruit
    );
}

#[test]
fn wall_collision_freezes_the_head() {
    let mut engine = engine_from("#####\n#A<a#\n#####\n");
    let mut spawner = NoFruitSpawner;
    let events = engine.tick(&mut spawner).unwrap();

    let snake = engine.state.snakes[0];
    assert!(!snake.alive);
    assert_eq!(snake.head, Pos::new(1, 1), "a dying snake does not move");
    assert_eq!(snake.tail, Pos::new(1, 3));

    let board = &engine.state.board;
    assert_eq!(board.get(Pos::new(1, 1)).unwrap(), Cell::DeadHead);
    assert_eq!(board.get(Pos::new(1, 0)).unwrap(), Cell::Wall, "destination untouched");
    assert_eq!(board.get(Pos::new(1, 2)).unwrap(), Cell::Body(Direction::Left));

    assert!(events.iter().any(
        |e| matches!(e, GameEvent::SnakeDied { snake: 0, at, .. } if *at == Pos::new(1, 1))
    ));
}

#[test]
fn self_collision_is_fatal() {
    // The snake curls around and its head points into its own body.
    let mut engine = engine_from("#####\n#d>v#\n# W<#\n#####\n");
    let mut spawner = NoFruitSpawner;
    engine.tick(&mut spawner).unwrap();

    let snake = engine.state.snakes[0];
    assert!(!snake.alive);
    let board = &engine.state.board;
    assert_eq!(board.get(Pos::new(2, 2)).unwrap(), Cell::DeadHead);
    assert_eq!(
        board.get(Pos::new(1, 2)).unwrap(),
        Cell::Body(Direction::Right),
        "the body cell it ran into is untouched"
    );
}

#[test]
fn running_into_another_snake_is_fatal() {
    // Snake 0 moves first and its old head cell becomes a body cell;
    // snake 1's destination is that cell.
    let text = "\
######
#d>D #
#  W #
#  w #
######
";
    let mut engine = engine_from(text);
    let mut spawner = NoFruitSpawner;
    engine.tick(&mut spawner).unwrap();

    assert!(engine.state.snakes[0].alive);
    assert_eq!(engine.state.snakes[0].head, Pos::new(1, 4));

    assert!(!engine.state.snakes[1].alive);
    assert_eq!(
        engine.state.board.get(Pos::new(2, 3)).unwrap(),
        Cell::DeadHead
    );
    assert_eq!(
        engine.state.board.get(Pos::new(1, 3)).unwrap(),
        Cell::Body(Direction::Right)
    );
}

#[test]
fn earlier_snake_vacating_a_cell_saves_a_later_one() {
    // Snake 1 is aimed at snake 0's tail cell. Snake 0 (smaller id)
    // moves first and vacates it, so snake 1 survives the tick.
    let text = "\
######
#d>D #
#W   #
#w   #
######
";
    let mut engine = engine_from(text);
    let mut spawner = NoFruitSpawner;
    engine.tick(&mut spawner).unwrap();

    assert!(engine.state.snakes[0].alive);
    assert!(engine.state.snakes[1].alive);
    assert_eq!(engine.state.snakes[1].head, Pos::new(1, 1));
    assert_eq!(engine.state.snakes[1].tail, Pos::new(2, 1));

    let board = &engine.state.board;
    assert_eq!(board.get(Pos::new(1, 1)).unwrap(), Cell::Head(Direction::Up));
    assert_eq!(board.get(Pos::new(2, 1)).unwrap(), Cell::Tail(Direction::Up));
    assert_eq!(board.get(Pos::new(3, 1)).unwrap(), Cell::Empty);
}

#[test]
fn dead_snakes_are_inert() {
    let mut engine = engine_from("#####\n#A<a#\n#####\n");
    let mut spawner = NoFruitSpawner;
    engine.tick(&mut spawner).unwrap();
    assert!(!engine.state.snakes[0].alive);

    let board_after_death = engine.state.board.encode_to_string();
    let roster_after_death = engine.state.snakes.clone();

    for _ in 0..3 {
        let events = engine.tick(&mut spawner).unwrap();
        assert_eq!(events.len(), 2, "only TickStarted and TickCompleted: {events:?}");
    }
    assert_eq!(engine.state.board.encode_to_string(), board_after_death);
    assert_eq!(engine.state.snakes, roster_after_death);
}

#[test]
fn growth_with_no_space_left_still_applies() {
    // Eating the only fruit leaves no empty cell for a replacement.
    let mut engine = engine_from("#####\n#*Aa#\n#####\n");
    let mut spawner = RandomFruitSpawner::new(1);
    let events = engine.tick(&mut spawner).unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::FruitNotPlaced { .. })));

    let snake = engine.state.snakes[0];
    assert!(snake.alive);
    assert_eq!(snake.head, Pos::new(1, 1));
    assert_eq!(snake.tail, Pos::new(1, 3));
    let (_, len) = trace_path(&engine.state.board, snake.tail).unwrap();
    assert_eq!(len, 3);
}

#[test]
fn concrete_scenario_default_board_reaches_fruit_on_tick_five() {
    let mut engine = GameEngine::new(GameState::default_board());
    let mut spawner = RandomFruitSpawner::new(7);

    engine.run_ticks(4, &mut spawner).unwrap();
    assert_eq!(engine.state.snakes[0].head, Pos::new(2, 8));

    let events = engine.tick(&mut spawner).unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::SnakeGrew { snake: 0, .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::FruitSpawned { .. })));
    assert_eq!(engine.state.snakes[0].head, Pos::new(2, 9));

    let fruit_count = engine
        .state
        .board
        .cells()
        .filter(|(_, c)| *c == Cell::Fruit)
        .count();
    assert_eq!(fruit_count, 1, "the eaten fruit was replaced by exactly one");
}
