use crate::error::DerivationError;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Unit for the timestamps of an [`AuctionStatus`](super::AuctionStatus).
///
/// The chain reports seconds since the epoch; the unit is applied to every
/// timestamp field of a status at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    pub fn from_millis_flag(in_millis: bool) -> Self {
        if in_millis {
            Self::Milliseconds
        } else {
            Self::Seconds
        }
    }

    pub fn apply(self, field: &'static str, secs: u64) -> Result<u64, DerivationError> {
        match self {
            Self::Seconds => Ok(secs),
            Self::Milliseconds => secs
                .checked_mul(MILLIS_PER_SECOND)
                .ok_or(DerivationError::Overflow { field }),
        }
    }
}
