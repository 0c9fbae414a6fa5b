//! Build timestamp injected as `FW_BUILD_TIME`.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

/// UTC instant a firmware build was stamped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTime(DateTime<Utc>);

impl BuildTime {
    const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S UTC";

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Resolve the build time, honouring `SOURCE_DATE_EPOCH` for reproducible builds.
    ///
    /// An unparsable epoch is ignored.
    pub fn from_env_or_now(source_date_epoch: Option<&str>) -> Self {
        source_date_epoch
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(Self::from_unix)
            .unwrap_or_else(Self::now)
    }

    pub fn from_unix(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }
}

impl fmt::Display for BuildTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
