pub mod amount;
pub mod heartbeat;
pub mod status;
pub mod time;

pub use amount::ONE_MET;
pub use heartbeat::Heartbeat;
pub use status::{AuctionStatus, ConverterStatus};
pub use time::TimeUnit;
