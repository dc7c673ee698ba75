//! Command line and derived configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::HubError;

#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(version, about = "Referee a trick-taking card game between player programs")]
pub struct Args {
    /// Deck file: a card count followed by that many cards
    pub deck: PathBuf,

    /// D-suit score at which it starts counting in a player's favour
    #[arg(allow_hyphen_values = true)]
    pub threshold: String,

    /// Player programs in seat order (at least two)
    #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
    pub players: Vec<OsString>,
}

/// Validated hub configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub deck_path: PathBuf,
    pub threshold: u32,
    pub players: Vec<OsString>,
}

impl HubConfig {
    /// Parse a full argv (program name first). `--help` and `--version`
    /// print and exit as usual.
    pub fn try_parse_from<I, T>(argv: I) -> Result<Self, HubError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(argv).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => HubError::Usage {
                detail: e.to_string(),
            },
        })?;
        Self::from_args(args)
    }

    pub fn from_args(args: Args) -> Result<Self, HubError> {
        if args.players.len() < 2 {
            return Err(HubError::Usage {
                detail: "at least two players are required".into(),
            });
        }
        Ok(Self {
            deck_path: args.deck,
            threshold: parse_threshold(&args.threshold)?,
            players: args.players,
        })
    }
}

/// Digits only, value at least 1.
fn parse_threshold(raw: &str) -> Result<u32, HubError> {
    let invalid = || HubError::InvalidThreshold {
        detail: format!("{raw:?}"),
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match raw.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(invalid()),
    }
}
