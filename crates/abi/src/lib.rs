pub mod auctions;
pub mod converter;

pub use auctions::IAuctions;
pub use converter::IAutonomousConverter;
