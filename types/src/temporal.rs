//! Date-like wrappers accepted by the caster.
//!
//! Inputs are recognised by implementing [`Temporal`], never by shape.

/// A value that can be rendered as an ISO-8601 datetime.
pub trait Temporal {
    /// Returns the value as an ISO-8601 / RFC 3339 string in UTC.
    fn to_iso_string(&self) -> String;
}

impl<T: Temporal + ?Sized> Temporal for &T {
    fn to_iso_string(&self) -> String {
        (**self).to_iso_string()
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Temporal;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

    impl<Tz: TimeZone> Temporal for DateTime<Tz> {
        fn to_iso_string(&self) -> String {
            self.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        }
    }

    impl Temporal for NaiveDateTime {
        fn to_iso_string(&self) -> String {
            self.and_utc().to_rfc3339_opts(SecondsFormat::AutoSi, true)
        }
    }

    impl Temporal for NaiveDate {
        fn to_iso_string(&self) -> String {
            self.and_hms_opt(0, 0, 0)
                .map(|dt| dt.to_iso_string())
                .unwrap_or_default()
        }
    }
}

#[cfg(feature = "time")]
mod time_impls {
    use super::Temporal;
    use time::format_description::well_known::Rfc3339;
    use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

    impl Temporal for OffsetDateTime {
        fn to_iso_string(&self) -> String {
            // An unformattable value (year outside 0..=9999) becomes empty,
            // which the caster treats as absent.
            self.to_offset(UtcOffset::UTC)
                .format(&Rfc3339)
                .unwrap_or_default()
        }
    }

    impl Temporal for PrimitiveDateTime {
        fn to_iso_string(&self) -> String {
            self.assume_utc().to_iso_string()
        }
    }
}
