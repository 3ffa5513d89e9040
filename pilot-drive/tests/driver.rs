use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use pilot_core::{AreaId, MapSeed, Position, PriorityLevel, Room};
use pilot_drive::{CommandSink, DriveConfig, DriveError, MoveOutcome, MovementDriver};
use pilot_exec::ExecutionContext;
use pilot_nav::{CollisionGrid, GameData, MapData, NavConfig, PathFinder};

struct StubGame {
    grid: CollisionGrid,
    player: Mutex<Position>,
    teleport: AtomicBool,
}

impl StubGame {
    fn open(size: u32, player: Position) -> Self {
        let mut grid = CollisionGrid::new(Position::new(0, 0), size, size);
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                grid.set_walkable(x, y, true);
            }
        }
        Self {
            grid,
            player: Mutex::new(player),
            teleport: AtomicBool::new(false),
        }
    }

    fn set_player(&self, p: Position) {
        *self.player.lock().unwrap() = p;
    }
}

impl GameData for StubGame {
    fn map_seed(&self) -> MapSeed {
        MapSeed(1)
    }

    fn current_area(&self) -> AreaId {
        AreaId(1)
    }

    fn player_position(&self) -> Position {
        *self.player.lock().unwrap()
    }

    fn can_teleport(&self) -> bool {
        self.teleport.load(Ordering::SeqCst)
    }

    fn collision_grid(&self, _area: AreaId) -> Option<CollisionGrid> {
        Some(self.grid.clone())
    }

    fn rooms(&self, _area: AreaId) -> Vec<Room> {
        Vec::new()
    }

    fn objects(&self, _area: AreaId) -> Vec<Position> {
        Vec::new()
    }

    fn is_special_area(&self, _area: AreaId) -> bool {
        false
    }
}

struct NoAdjacentLevels;

impl MapData for NoAdjacentLevels {
    fn adjacent_level_grid(&self, _destination: Position, _current: AreaId) -> Option<CollisionGrid> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    MovePointer(i32, i32),
    ForceMove,
    TeleportClick(i32, i32),
}

/// Records commands; optionally snaps the player to a fixed position once
/// a movement command lands, simulating the remote process catching up.
struct RecordingSink {
    log: Mutex<Vec<Command>>,
    snap_to: Option<(Arc<StubGame>, Position)>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            snap_to: None,
        }
    }

    fn snapping(game: Arc<StubGame>, to: Position) -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            snap_to: Some((game, to)),
        }
    }

    fn commands(&self) -> Vec<Command> {
        self.log.lock().unwrap().clone()
    }

    fn snap(&self) {
        if let Some((game, to)) = &self.snap_to {
            game.set_player(*to);
        }
    }
}

#[async_trait]
impl CommandSink for RecordingSink {
    async fn move_pointer(&self, x: i32, y: i32) -> Result<()> {
        self.log.lock().unwrap().push(Command::MovePointer(x, y));
        Ok(())
    }

    async fn force_move(&self) -> Result<()> {
        self.log.lock().unwrap().push(Command::ForceMove);
        self.snap();
        Ok(())
    }

    async fn teleport_click(&self, x: i32, y: i32) -> Result<()> {
        self.log.lock().unwrap().push(Command::TeleportClick(x, y));
        self.snap();
        Ok(())
    }
}

fn test_config() -> DriveConfig {
    DriveConfig {
        walk_tick: Duration::from_millis(20),
        teleport_tick: Duration::from_millis(10),
        max_move_duration: Duration::from_millis(500),
        ..DriveConfig::default()
    }
}

fn driver(
    game: Arc<StubGame>,
    sink: Arc<RecordingSink>,
    ctx: &ExecutionContext,
    config: DriveConfig,
) -> MovementDriver<StubGame, NoAdjacentLevels, RecordingSink> {
    let finder = PathFinder::new(game.clone(), Arc::new(NoAdjacentLevels), NavConfig::default());
    MovementDriver::new(game, finder, sink, Arc::new(ctx.command_gate()), config)
}

#[tokio::test]
async fn one_walking_command_targets_at_most_stride_tiles_ahead() {
    // Interior row, clear of the corner-padding band along the grid edge,
    // so the shortest path is the straight line.
    let game = Arc::new(StubGame::open(40, Position::new(5, 20)));
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let path = drv
        .finder()
        .get_path(Position::new(5, 20), Position::new(35, 20), &[])
        .expect("path should exist");
    drv.move_through_path(&handle, &path, 5)
        .await
        .expect("command should be issued");

    // Target tile (10, 20): delta (5, 0) projects to (739, 409).
    assert_eq!(
        sink.commands(),
        vec![Command::MovePointer(739, 409), Command::ForceMove]
    );
}

#[tokio::test]
async fn stride_past_the_path_end_targets_the_final_tile() {
    let game = Arc::new(StubGame::open(12, Position::new(4, 6)));
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let path = drv
        .finder()
        .get_path(Position::new(4, 6), Position::new(7, 6), &[])
        .expect("path should exist");
    drv.move_through_path(&handle, &path, 99)
        .await
        .expect("command should be issued");

    // Delta (3, 0) projects to (699, 389).
    assert_eq!(
        sink.commands(),
        vec![Command::MovePointer(699, 389), Command::ForceMove]
    );
}

#[tokio::test]
async fn teleporters_issue_a_single_directional_click() {
    let game = Arc::new(StubGame::open(40, Position::new(0, 0)));
    game.teleport.store(true, Ordering::SeqCst);
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let path = drv
        .finder()
        .get_path(Position::new(0, 0), Position::new(30, 0), &[])
        .expect("path should exist");
    drv.move_through_path(&handle, &path, 25)
        .await
        .expect("command should be issued");

    let commands = sink.commands();
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], Command::TeleportClick(_, _)));
}

#[tokio::test(start_paused = true)]
async fn move_to_arrives_once_the_agent_reaches_the_target() {
    let game = Arc::new(StubGame::open(40, Position::new(0, 0)));
    let destination = Position::new(20, 20);
    let sink = Arc::new(RecordingSink::snapping(game.clone(), destination));
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let outcome = drv.move_to(&handle, destination).await.expect("move runs");
    assert_eq!(outcome, MoveOutcome::Arrived);
    assert!(!sink.commands().is_empty());
}

#[tokio::test(start_paused = true)]
async fn move_to_gives_up_when_the_agent_never_moves() {
    let game = Arc::new(StubGame::open(40, Position::new(0, 0)));
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let outcome = drv
        .move_to(&handle, Position::new(30, 30))
        .await
        .expect("move runs");
    assert_eq!(outcome, MoveOutcome::GaveUp);
    assert!(!sink.commands().is_empty(), "commands were being issued");
}

#[tokio::test(start_paused = true)]
async fn move_to_yields_while_preempted_and_issues_nothing() {
    let game = Arc::new(StubGame::open(40, Position::new(0, 0)));
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    ctx.switch_priority(PriorityLevel::High);
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);

    let outcome = drv
        .move_to(&handle, Position::new(30, 30))
        .await
        .expect("move runs");
    assert_eq!(outcome, MoveOutcome::GaveUp);
    assert!(sink.commands().is_empty(), "a yielded loop issues no commands");
}

#[tokio::test(start_paused = true)]
async fn move_to_unwinds_on_stop() {
    let game = Arc::new(StubGame::open(40, Position::new(0, 0)));
    let sink = Arc::new(RecordingSink::new());
    let ctx = ExecutionContext::new();
    let mut drv = driver(game, sink.clone(), &ctx, test_config());
    let handle = ctx.attach(PriorityLevel::Normal);
    ctx.switch_priority(PriorityLevel::Stop);

    let err = drv
        .move_to(&handle, Position::new(30, 30))
        .await
        .expect_err("stop cancels the move");
    assert!(matches!(err, DriveError::Cancelled));
    assert!(sink.commands().is_empty());
}
