use crate::domain::deck::Deck;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat index, 0-based; also the player's ordinal ID on the wire.
pub type PlayerId = usize;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Players handshaken, nothing dealt yet.
    Start,
    /// Hands dealt and sent.
    Dealt,
    /// About to open a round; the leader is known.
    NewRound,
    /// Collecting one card from every player.
    Playing,
    /// All cards of the round are in; report and score.
    EndRound,
    /// All rounds complete.
    EndGame,
}

impl Phase {
    /// Transition table. `rounds_remaining` is only consulted when leaving
    /// `EndRound`; `EndGame` is terminal.
    pub fn next(self, rounds_remaining: bool) -> Option<Phase> {
        match self {
            Phase::Start => Some(Phase::Dealt),
            Phase::Dealt => Some(Phase::NewRound),
            Phase::NewRound => Some(Phase::Playing),
            Phase::Playing => Some(Phase::EndRound),
            Phase::EndRound if rounds_remaining => Some(Phase::NewRound),
            Phase::EndRound => Some(Phase::EndGame),
            Phase::EndGame => None,
        }
    }
}

/// Fixed parameters of one game, also handed to every player at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub player_count: usize,
    pub threshold: u32,
    pub hand_size: usize,
}

/// One round: who led, what each seat played, and the order of play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub leader: PlayerId,
    /// Card played per seat, indexed by `PlayerId`.
    pub by_seat: Vec<Option<Card>>,
    /// Plays in temporal order.
    pub plays: Vec<(PlayerId, Card)>,
}

impl RoundRecord {
    pub fn new(leader: PlayerId, player_count: usize) -> Self {
        Self {
            leader,
            by_seat: vec![None; player_count],
            plays: Vec::with_capacity(player_count),
        }
    }

    /// Suit of the first card played, once there is one.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, card)| card.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.by_seat.len()
    }

    pub fn record(&mut self, who: PlayerId, card: Card) {
        self.by_seat[who] = Some(card);
        self.plays.push((who, card));
    }
}

/// Per-seat accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatScore {
    /// Tricks won.
    pub tricks: u32,
    /// D-suit cards collected across won tricks.
    pub d_score: u32,
}

/// Entire game container, mutated only by the round engine.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub settings: GameSettings,
    /// Undealt cards.
    pub deck: Deck,
    /// Players' hands, indexed by seat.
    pub hands: Vec<Vec<Card>>,
    /// Leader of the current (or next) round.
    pub leader: PlayerId,
    /// Last seat to play in the current round.
    pub last_player: PlayerId,
    /// Player whose card is expected next (only during `Playing`).
    pub turn: Option<PlayerId>,
    /// Completed rounds.
    pub rounds_played: usize,
    /// One record per opened round.
    pub rounds: Vec<RoundRecord>,
    pub scores: Vec<SeatScore>,
}

impl GameState {
    pub fn new(settings: GameSettings, deck: Deck) -> Self {
        Self {
            phase: Phase::Start,
            settings,
            deck,
            hands: vec![Vec::new(); settings.player_count],
            leader: 0,
            last_player: prev_player(0, settings.player_count),
            turn: None,
            rounds_played: 0,
            rounds: Vec::with_capacity(settings.hand_size),
            scores: vec![SeatScore::default(); settings.player_count],
        }
    }

    pub fn rounds_remaining(&self) -> bool {
        self.rounds_played < self.settings.hand_size
    }

    /// Move to the next phase per the transition table.
    pub fn advance(&mut self) -> Result<Phase, DomainError> {
        let next = self
            .phase
            .next(self.rounds_remaining())
            .ok_or_else(|| DomainError::invariant("no transition out of EndGame"))?;
        self.phase = next;
        Ok(next)
    }

    pub fn require_phase(&self, expected: Phase, ctx: &'static str) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("{ctx}: expected {expected:?}, in {:?}", self.phase),
            ));
        }
        Ok(())
    }

    /// Open a round: record it and hand the first turn to the leader.
    /// Returns the last seat to play.
    pub fn begin_round(&mut self) -> Result<PlayerId, DomainError> {
        self.require_phase(Phase::NewRound, "begin_round")?;
        let count = self.settings.player_count;
        self.last_player = prev_player(self.leader, count);
        self.turn = Some(self.leader);
        self.rounds.push(RoundRecord::new(self.leader, count));
        Ok(self.last_player)
    }

    pub fn current_round(&self) -> Result<&RoundRecord, DomainError> {
        self.rounds
            .last()
            .ok_or_else(|| DomainError::invariant("no round has been opened"))
    }

    pub fn is_first_round(&self) -> bool {
        self.rounds_played == 0
    }
}

/// Seat `delta` places clockwise from `seat` (wrap-around).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: usize, player_count: usize) -> PlayerId {
    (seat + delta) % player_count
}

/// Returns the next seat in ascending, wrap-around order.
#[inline]
pub fn next_player(p: PlayerId, player_count: usize) -> PlayerId {
    seat_offset(p, 1, player_count)
}

/// Returns the seat before `p`: for leader 0 that is the last seat.
#[inline]
pub fn prev_player(p: PlayerId, player_count: usize) -> PlayerId {
    seat_offset(p, player_count - 1, player_count)
}
