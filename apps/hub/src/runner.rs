//! Wires a validated configuration to a finished game.

use std::io::Write;

use tracing::{debug, error};

use crate::config::HubConfig;
use crate::domain::{hand_size_for, load_deck, Deck, GameSettings, GameState};
use crate::engine::play_game;
use crate::error::HubError;
use crate::orchestrator::PlayerRoster;
use crate::shutdown::ShutdownCoordinator;

/// Load the deck, start the players and play one game, writing the trace to
/// `out`. Players are always torn down before this returns.
pub async fn run_hub<O: Write>(config: &HubConfig, out: &mut O) -> Result<Vec<i64>, HubError> {
    let deck = load_deck(&config.deck_path)?;
    let settings = GameSettings {
        player_count: config.players.len(),
        threshold: config.threshold,
        hand_size: hand_size_for(deck.len(), config.players.len())?,
    };
    debug!(?settings, deck = deck.len(), "Deck loaded");

    let shutdown = ShutdownCoordinator::install()?;
    run_game(config, settings, deck, out, &shutdown).await
}

/// Spawn, handshake and play under `shutdown`. Teardown runs exactly once,
/// here, whichever way the game ends.
pub async fn run_game<O: Write>(
    config: &HubConfig,
    settings: GameSettings,
    deck: Deck,
    out: &mut O,
    shutdown: &ShutdownCoordinator,
) -> Result<Vec<i64>, HubError> {
    let cancel = shutdown.token();
    if cancel.is_cancelled() {
        return Err(HubError::Signalled);
    }

    let mut roster = PlayerRoster::spawn_all(&config.players, &settings).await?;
    debug!(pids = ?roster.pids(), "Players started");
    let state = GameState::new(settings, deck);

    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(HubError::Signalled),
        result = async {
            roster.handshake_all().await?;
            play_game(state, roster.channels_mut(), out, &cancel).await
        } => result,
    };

    roster.teardown().await;
    if let Err(e) = &outcome {
        error!(error = %e, signalled = shutdown.is_signalled(), "Game ended abnormally");
    }
    outcome
}
