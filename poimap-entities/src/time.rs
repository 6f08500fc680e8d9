use std::fmt;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A timestamp with seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::from_unix_timestamp(self.0).map_err(|_| fmt::Error)?;
        let formatted = dt.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_seconds() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from_seconds(t1.into_seconds());
        assert_eq!(t1, t2);
    }

    #[test]
    fn display_as_rfc3339() {
        let t = Timestamp::from_seconds(0);
        assert_eq!("1970-01-01T00:00:00Z", t.to_string());
    }
}
