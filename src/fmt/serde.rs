/*!
This module provides helpers to use with [Serde].

The helpers are exposed as modules meant to be used with
Serde's [`with` attribute].

The `Deserialize` implementation of [`DateOnly`](crate::DateOnly) interprets
dates in the host's local UTC offset, since that is what
[`DateOnly::new`](crate::DateOnly::new) does. That is often not what one
wants when reading data produced elsewhere. The helpers here deserialize
dates under a fixed [`TimezoneShift`](crate::tz::TimezoneShift) instead.
Serialization always emits the canonical `YYYY-MM-DD` form, which doesn't
depend on the shift at all.

# Module hierarchy

Only the leaves of the tree are usable with Serde's `with` attribute. For
each leaf, the full path is spelled out for easy copy & paste.

* [`date`]
    * [`utc`](self::date::utc)
        * [`dateonly::fmt::serde::date::utc::required`](self::date::utc::required)
        * [`dateonly::fmt::serde::date::utc::optional`](self::date::utc::optional)
    * [`min_max`](self::date::min_max)
        * [`dateonly::fmt::serde::date::min_max::required`](self::date::min_max::required)
        * [`dateonly::fmt::serde::date::min_max::optional`](self::date::min_max::optional)

# Example

This example shows how to deserialize a date so that its epoch range covers
every UTC offset in use:

```
use dateonly::DateOnly;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "dateonly::fmt::serde::date::min_max::required")]
    due: DateOnly,
}

let json = r#"{"due":"2001-02-03"}"#;
let got: Record = serde_json::from_str(&json)?;
assert_eq!(got.due.start_epoch(), 981_158_400_000 - 43_200_000);
assert_eq!(got.due.end_epoch(), 981_244_799_999 + 50_400_000);
assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// Convenience routines for (de)serializing [`DateOnly`](crate::DateOnly)
/// under a fixed timezone shift.
pub mod date {
    use serde::de;

    use crate::{tz::TimezoneShift, DateOnly};

    /// A visitor for `DateOnly` that parses strings in a particular shift.
    struct Visitor(TimezoneShift);

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = DateOnly;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("a date string in the form YYYY-MM-DD")
        }

        #[inline]
        fn visit_bytes<E: de::Error>(
            self,
            value: &[u8],
        ) -> Result<DateOnly, E> {
            DateOnly::parse_in(value, self.0).map_err(de::Error::custom)
        }

        #[inline]
        fn visit_str<E: de::Error>(self, value: &str) -> Result<DateOnly, E> {
            self.visit_bytes(value.as_bytes())
        }
    }

    /// A visitor for `Option<DateOnly>`.
    struct OptionalVisitor(TimezoneShift);

    impl<'de> de::Visitor<'de> for OptionalVisitor {
        type Value = Option<DateOnly>;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("a date string in the form YYYY-MM-DD or `None`")
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            de: D,
        ) -> Result<Option<DateOnly>, D::Error> {
            de.deserialize_str(Visitor(self.0)).map(Some)
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<Option<DateOnly>, E> {
            Ok(None)
        }
    }

    fn serialize<S: serde::Serializer>(
        date: &DateOnly,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        se.collect_str(date)
    }

    fn serialize_optional<S: serde::Serializer>(
        date: &Option<DateOnly>,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        match *date {
            None => se.serialize_none(),
            Some(ref date) => se.collect_str(date),
        }
    }

    /// (De)serialize a date interpreted in UTC.
    pub mod utc {
        /// (De)serialize a required date interpreted in UTC.
        pub mod required {
            use crate::{tz::TimezoneShift, DateOnly};

            /// Serialize a required date in its canonical form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                date: &DateOnly,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                super::super::serialize(date, se)
            }

            /// Deserialize a required date, interpreting it in UTC.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<DateOnly, D::Error> {
                de.deserialize_str(super::super::Visitor(TimezoneShift::UTC))
            }
        }

        /// (De)serialize an optional date interpreted in UTC.
        pub mod optional {
            use crate::{tz::TimezoneShift, DateOnly};

            /// Serialize an optional date in its canonical form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                date: &Option<DateOnly>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                super::super::serialize_optional(date, se)
            }

            /// Deserialize an optional date, interpreting it in UTC.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<DateOnly>, D::Error> {
                de.deserialize_option(super::super::OptionalVisitor(
                    TimezoneShift::UTC,
                ))
            }
        }
    }

    /// (De)serialize a date whose epoch range covers every UTC offset from
    /// `-12:00` to `+14:00`.
    pub mod min_max {
        /// (De)serialize a required date with the "min-max" shift.
        pub mod required {
            use crate::{tz::TimezoneShift, DateOnly};

            /// Serialize a required date in its canonical form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                date: &DateOnly,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                super::super::serialize(date, se)
            }

            /// Deserialize a required date with the "min-max" shift.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<DateOnly, D::Error> {
                de.deserialize_str(super::super::Visitor(
                    TimezoneShift::MinMax,
                ))
            }
        }

        /// (De)serialize an optional date with the "min-max" shift.
        pub mod optional {
            use crate::{tz::TimezoneShift, DateOnly};

            /// Serialize an optional date in its canonical form.
            #[inline]
            pub fn serialize<S: serde::Serializer>(
                date: &Option<DateOnly>,
                se: S,
            ) -> Result<S::Ok, S::Error> {
                super::super::serialize_optional(date, se)
            }

            /// Deserialize an optional date with the "min-max" shift.
            #[inline]
            pub fn deserialize<'de, D: serde::Deserializer<'de>>(
                de: D,
            ) -> Result<Option<DateOnly>, D::Error> {
                de.deserialize_option(super::super::OptionalVisitor(
                    TimezoneShift::MinMax,
                ))
            }
        }
    }
}
