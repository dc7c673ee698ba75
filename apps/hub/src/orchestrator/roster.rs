use std::ffi::OsString;

use tokio::process::Child;
use tracing::{debug, warn};

use crate::domain::{GameSettings, PlayerId};
use crate::error::HubError;
use crate::orchestrator::process::{handshake, spawn_player, ChildChannel};

/// All players of one game, indexed by seat.
///
/// Channels and process handles are kept apart so the engine can borrow the
/// channels as a slice while the roster still owns the children.
#[derive(Debug)]
pub struct PlayerRoster {
    channels: Vec<ChildChannel>,
    children: Vec<Child>,
    torn_down: bool,
}

impl PlayerRoster {
    fn with_capacity(n: usize) -> Self {
        Self {
            channels: Vec::with_capacity(n),
            children: Vec::with_capacity(n),
            torn_down: false,
        }
    }

    /// Spawn every player in seat order. If one fails, those already started
    /// are torn down before the error is returned.
    pub async fn spawn_all(
        programs: &[OsString],
        settings: &GameSettings,
    ) -> Result<Self, HubError> {
        let mut roster = Self::with_capacity(programs.len());
        for (seat, program) in programs.iter().enumerate() {
            match spawn_player(program, settings, seat) {
                Ok(player) => {
                    roster.channels.push(player.channel);
                    roster.children.push(player.child);
                }
                Err(e) => {
                    roster.teardown().await;
                    return Err(e);
                }
            }
        }
        Ok(roster)
    }

    /// Handshake with every player in seat order; the first failure wins.
    pub async fn handshake_all(&mut self) -> Result<(), HubError> {
        for (seat, channel) in self.channels.iter_mut().enumerate() {
            handshake(seat, channel).await?;
        }
        Ok(())
    }

    pub fn channels_mut(&mut self) -> &mut [ChildChannel] {
        &mut self.channels
    }

    /// OS process IDs by seat (None once reaped).
    pub fn pids(&self) -> Vec<Option<u32>> {
        self.children.iter().map(Child::id).collect()
    }

    /// Close both pipes, kill and reap every player, in seat order.
    /// Safe to call more than once; later calls do nothing.
    pub async fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        for (seat, (channel, child)) in self
            .channels
            .iter_mut()
            .zip(self.children.iter_mut())
            .enumerate()
        {
            channel.close_writer().await;
            channel.close_reader();
            reap(seat, child).await;
        }
        debug!(players = self.children.len(), "Players torn down");
    }
}

async fn reap(seat: PlayerId, child: &mut Child) {
    if let Err(e) = child.start_kill() {
        debug!(seat, error = %e, "Kill failed, player probably already exited");
    }
    match child.wait().await {
        Ok(status) => debug!(seat, %status, "Player reaped"),
        Err(e) => warn!(seat, error = %e, "Failed to reap player"),
    }
}
