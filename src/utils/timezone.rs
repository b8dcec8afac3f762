use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Zone whose calendar decides "today", and with it the planned ISO week
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    /// `None`, blank and `local` mean the system zone; `utc`/`z` are accepted
    /// alongside IANA names such as `America/Chicago`.
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let name = value.map(str::trim).unwrap_or_default();
        match name.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Timezone::Local),
            "utc" | "z" => Ok(Timezone::Named(chrono_tz::UTC)),
            _ => name
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }

    /// Calendar date of `utc` in this zone
    pub(crate) fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        }
    }

    pub(crate) fn today(self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}
