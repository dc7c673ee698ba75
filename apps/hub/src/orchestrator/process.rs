use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::debug;

use crate::domain::{GameSettings, PlayerId};
use crate::error::HubError;
use crate::protocol::PlayerChannel;

/// Channel to a real child: we read its stdout and write its stdin.
pub type ChildChannel = PlayerChannel<ChildStdout, ChildStdin>;

/// A started player: its process handle and the hub's ends of its pipes.
#[derive(Debug)]
pub struct PlayerProcess {
    pub child: Child,
    pub channel: ChildChannel,
}

/// Start `program player_count player_id threshold hand_size` with piped
/// stdin/stdout and stderr discarded.
pub fn spawn_player(
    program: &OsStr,
    settings: &GameSettings,
    seat: PlayerId,
) -> Result<PlayerProcess, HubError> {
    let mut child = Command::new(program)
        .arg(settings.player_count.to_string())
        .arg(seat.to_string())
        .arg(settings.threshold.to_string())
        .arg(settings.hand_size.to_string())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| HubError::player_start(seat, format!("{}: {e}", program.to_string_lossy())))?;

    let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
        return Err(HubError::player_start(seat, "child pipes unavailable"));
    };

    debug!(seat, pid = ?child.id(), program = %program.to_string_lossy(), "Spawned player");
    Ok(PlayerProcess {
        child,
        channel: PlayerChannel::new(stdout, stdin),
    })
}

/// Wait for the player's `@`. Anything else, or EOF, is a start failure.
pub async fn handshake(seat: PlayerId, channel: &mut ChildChannel) -> Result<(), HubError> {
    channel
        .read_handshake()
        .await
        .map_err(|e| HubError::player_start(seat, e))?;
    debug!(seat, "Player handshake complete");
    Ok(())
}
