//! Phase-driven game loop.
//!
//! One step per phase: deal, announce, collect a trick, score, finish. The
//! cancellation token is checked before every step so a hang-up is noticed
//! between reads as well as during them (the runner drops the future).

use std::io::Write;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::dealing::deal_game;
use crate::domain::scoring::{apply_round_scoring, final_scores};
use crate::domain::tricks::play_card;
use crate::domain::{GameState, Phase, PlayerId};
use crate::engine::report;
use crate::error::HubError;
use crate::protocol::{
    decode_play, encode_game_over, encode_hand, encode_new_round, encode_played, PlayerChannel,
};

/// Run a whole game and return the final score per seat.
pub async fn play_game<R, W, O>(
    state: GameState,
    channels: &mut [PlayerChannel<R, W>],
    out: &mut O,
    cancel: &CancellationToken,
) -> Result<Vec<i64>, HubError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    O: Write,
{
    RoundEngine::new(state, channels, out, cancel).run().await
}

pub struct RoundEngine<'a, R, W, O> {
    state: GameState,
    channels: &'a mut [PlayerChannel<R, W>],
    out: &'a mut O,
    cancel: &'a CancellationToken,
}

impl<'a, R, W, O> RoundEngine<'a, R, W, O>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    O: Write,
{
    pub fn new(
        state: GameState,
        channels: &'a mut [PlayerChannel<R, W>],
        out: &'a mut O,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            state,
            channels,
            out,
            cancel,
        }
    }

    /// Drive the game to completion. A malformed message gets a best-effort
    /// `GAMEOVER` to everyone before the error is returned.
    pub async fn run(mut self) -> Result<Vec<i64>, HubError> {
        let result = self.drive().await;
        if let Err(e @ HubError::InvalidMessage { .. }) = &result {
            debug!(error = %e, "Game aborted by malformed message");
            self.broadcast(encode_game_over(), None).await;
        }
        result
    }

    async fn drive(&mut self) -> Result<Vec<i64>, HubError> {
        if self.channels.len() != self.state.settings.player_count {
            return Err(HubError::Internal {
                detail: format!(
                    "{} channels for {} players",
                    self.channels.len(),
                    self.state.settings.player_count
                ),
            });
        }

        loop {
            if self.cancel.is_cancelled() {
                return Err(HubError::Signalled);
            }

            match self.state.phase {
                Phase::Start => self.deal().await?,
                Phase::Dealt => {}
                Phase::NewRound => self.open_round().await?,
                Phase::Playing => self.play_trick().await?,
                Phase::EndRound => self.end_round()?,
                Phase::EndGame => return Ok(self.end_game().await),
            }
            let next = self.state.advance()?;
            debug!(phase = ?next, "Phase transition");
        }
    }

    async fn deal(&mut self) -> Result<(), HubError> {
        deal_game(&mut self.state)?;
        for seat in 0..self.channels.len() {
            let msg = encode_hand(&self.state.hands[seat]);
            self.send_to(seat, &msg).await;
        }
        Ok(())
    }

    async fn open_round(&mut self) -> Result<(), HubError> {
        if self.state.is_first_round() {
            let msg = encode_new_round(self.state.leader);
            self.broadcast(&msg, None).await;
        }
        self.state.begin_round()?;
        Ok(())
    }

    /// Read one card from each seat in turn order, relaying each accepted
    /// play to the other seats before the next read.
    async fn play_trick(&mut self) -> Result<(), HubError> {
        loop {
            let who = self
                .state
                .turn
                .ok_or_else(|| HubError::Internal {
                    detail: "no player to move while Playing".into(),
                })?;

            let line = self.channels[who]
                .read_line()
                .await
                .map_err(|e| HubError::from_protocol(who, e))?;
            let card = decode_play(&line).map_err(|e| HubError::from_protocol(who, e))?;
            let played =
                play_card(&mut self.state, who, card).map_err(|e| HubError::from_play(who, card, e))?;
            debug!(seat = who, %card, "Accepted play");

            let msg = encode_played(who, card);
            self.broadcast(&msg, Some(who)).await;

            if played.trick_completed {
                return Ok(());
            }
        }
    }

    fn end_round(&mut self) -> Result<(), HubError> {
        let round = self.state.current_round()?;
        if let Err(e) = report::write_round(self.out, round) {
            warn!(error = %e, "Failed to write round trace");
        }
        let outcome = apply_round_scoring(&mut self.state)?;
        info!(
            round = self.state.rounds_played,
            winner = outcome.winner,
            d_cards = outcome.d_cards,
            "Round won"
        );
        Ok(())
    }

    async fn end_game(&mut self) -> Vec<i64> {
        let scores = final_scores(&self.state);
        if let Err(e) = report::write_scores(self.out, &scores) {
            warn!(error = %e, "Failed to write final scores");
        }
        info!(?scores, "Game over");
        self.broadcast(encode_game_over(), None).await;
        scores
    }

    /// Send to every seat in order, skipping `except`.
    async fn broadcast(&mut self, msg: &str, except: Option<PlayerId>) {
        for seat in 0..self.channels.len() {
            if Some(seat) != except {
                self.send_to(seat, msg).await;
            }
        }
    }

    /// Write faults are not fatal here; they show up as EOF on the next read.
    async fn send_to(&mut self, seat: PlayerId, msg: &str) {
        if let Err(e) = self.channels[seat].send(msg).await {
            warn!(seat, error = %e, "Write to player failed");
        }
    }
}
