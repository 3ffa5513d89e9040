use std::sync::Arc;

use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use pilot_core::Position;
use pilot_exec::{CommandGate, Gate, RoutineHandle};
use pilot_nav::{GameData, MapData, NavError, PathFinder, TilePath};

use crate::config::DriveConfig;
use crate::error::DriveError;
use crate::screen;
use crate::sink::CommandSink;

/// How a movement loop ended.
///
/// Giving up on a timeout is deliberately a distinct outcome: callers must
/// be able to tell "arrived" from "stopped trying" without comparing
/// positions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Arrived,
    GaveUp,
}

/// Consumes computed paths and emits paced movement commands through the
/// priority command gate, respecting the agent's locomotion mode.
pub struct MovementDriver<G, M, S> {
    game: Arc<G>,
    finder: PathFinder<G, M>,
    sink: Arc<S>,
    gate: Arc<CommandGate>,
    config: DriveConfig,
}

impl<G, M, S> MovementDriver<G, M, S>
where
    G: GameData,
    M: MapData,
    S: CommandSink,
{
    pub fn new(
        game: Arc<G>,
        finder: PathFinder<G, M>,
        sink: Arc<S>,
        gate: Arc<CommandGate>,
        config: DriveConfig,
    ) -> Self {
        Self {
            game,
            finder,
            sink,
            gate,
            config,
        }
    }

    pub fn finder(&mut self) -> &mut PathFinder<G, M> {
        &mut self.finder
    }

    /// Issue a single movement command along `path`.
    ///
    /// The command targets the tile at most `stride` tiles ahead, never
    /// further, bounding how far one tick may move the agent. Walkers get
    /// a pointer move plus the forced-move keybinding under one gate
    /// acquisition; teleporters get a single directional click.
    pub async fn move_through_path(
        &self,
        handle: &RoutineHandle,
        path: &TilePath,
        stride: u32,
    ) -> Result<(), DriveError> {
        let tiles = path.tiles();
        let Some(&target) = tiles.get(stride.min(path.distance()) as usize) else {
            return Ok(());
        };

        let me = self.game.player_position();
        let (screen_x, screen_y) = screen::project(target - me);
        debug!(?target, screen_x, screen_y, "issuing movement command");

        let attached = handle.attached_priority();
        if self.game.can_teleport() {
            self.gate
                .issue(attached, self.sink.teleport_click(screen_x, screen_y))
                .await??;
        } else {
            self.gate
                .issue(attached, async {
                    self.sink.move_pointer(screen_x, screen_y).await?;
                    self.sink.force_move().await
                })
                .await??;
        }
        Ok(())
    }

    /// Walk or teleport the agent to `destination`, re-pathing each tick.
    ///
    /// Polls cancellation and priority before every command; exceeding the
    /// configured move duration returns [`MoveOutcome::GaveUp`]. A
    /// `NotFound` route falls back to the closest walkable approach.
    pub async fn move_to(
        &mut self,
        handle: &RoutineHandle,
        destination: Position,
    ) -> Result<MoveOutcome, DriveError> {
        let deadline = Instant::now() + self.config.max_move_duration;
        let arrival = f64::from(self.config.arrival_distance);

        loop {
            if self.finder.distance_from_me(destination) <= arrival {
                return Ok(MoveOutcome::Arrived);
            }
            if Instant::now() >= deadline {
                warn!(?destination, "move timed out, giving up");
                return Ok(MoveOutcome::GaveUp);
            }

            let tick = if self.game.can_teleport() {
                self.config.teleport_tick
            } else {
                self.config.walk_tick
            };

            match handle.gate() {
                Gate::Stop => return Err(DriveError::Cancelled),
                Gate::Yield => {
                    sleep(tick).await;
                    continue;
                }
                Gate::Proceed => {}
            }

            let me = self.game.player_position();
            let path = match self.finder.get_path(me, destination, &[]) {
                Ok(path) => path,
                Err(NavError::NotFound) => {
                    self.finder.get_closest_walkable_path(destination, &[])?
                }
                Err(e) => return Err(e.into()),
            };
            if path.is_empty() {
                return Ok(MoveOutcome::Arrived);
            }

            let stride = if self.game.can_teleport() {
                self.config.teleport_stride
            } else {
                self.config.walk_stride
            };
            match self.move_through_path(handle, &path, stride).await {
                Ok(()) | Err(DriveError::Preempted) => {}
                Err(e) => return Err(e),
            }
            sleep(tick).await;
        }
    }
}
