use alloy::primitives::U256;
use serde::Serializer;

/// One whole MET in base units (18 decimals).
pub const ONE_MET: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Serializes token amounts as base-10 strings, keeping full precision for
/// consumers that cannot represent 256-bit integers.
pub(crate) fn serialize_decimal<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
