/// ID types for Vinyl Player entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "sqlx")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

/// Record identifier
///
/// Millisecond Unix timestamp taken when the record was saved. Storage keeps
/// identifiers strictly increasing, so ordering by id is ordering by save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a record ID from its raw value
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// The id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(feature = "sqlx")]
impl Type<Sqlite> for RecordId {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }
}

#[cfg(feature = "sqlx")]
impl<'q> Encode<'q, Sqlite> for RecordId {
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Sqlite>>::encode_by_ref(&self.0, args)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> Decode<'r, Sqlite> for RecordId {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <i64 as Decode<Sqlite>>::decode(value)?;
        Ok(RecordId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_display() {
        let id = RecordId::new(1_700_000_000_123);
        assert_eq!(format!("{}", id), "1700000000123");
    }

    #[test]
    fn record_id_parses_from_path_segment() {
        let id: RecordId = " 42 ".parse().unwrap();
        assert_eq!(id, RecordId::new(42));
        assert!("abc".parse::<RecordId>().is_err());
    }

    #[test]
    fn record_id_next_is_greater() {
        let id = RecordId::new(10);
        assert!(id.next() > id);
        assert_eq!(RecordId::new(i64::MAX).next(), RecordId::new(i64::MAX));
    }

    #[test]
    fn record_id_serializes_as_number() {
        let json = serde_json::to_string(&RecordId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
