use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either a known integer or the external sentinel `"na"`.
///
/// Internally this is just an `Option<i64>`; the tagging only happens at
/// the serde boundary, per the "dynamic typing of neto/tara" design note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaInt(pub Option<i64>);

impl NaInt {
    pub fn known(value: i64) -> Self {
        NaInt(Some(value))
    }

    pub fn na() -> Self {
        NaInt(None)
    }

    pub fn value(self) -> Option<i64> {
        self.0
    }
}

impl From<Option<i64>> for NaInt {
    fn from(value: Option<i64>) -> Self {
        NaInt(value)
    }
}

impl Serialize for NaInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_i64(v),
            None => serializer.serialize_str("na"),
        }
    }
}

impl<'de> Deserialize<'de> for NaInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NaIntVisitor;

        impl<'de> Visitor<'de> for NaIntVisitor {
            type Value = NaInt;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer or the string \"na\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NaInt, E> {
                Ok(NaInt(Some(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NaInt, E> {
                Ok(NaInt(Some(v as i64)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NaInt, E> {
                if v == "na" {
                    Ok(NaInt(None))
                } else {
                    Err(de::Error::custom(format!("expected \"na\", got \"{v}\"")))
                }
            }
        }

        deserializer.deserialize_any(NaIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_known_value_as_number() {
        assert_eq!(serde_json::to_string(&NaInt::known(42)).unwrap(), "42");
    }

    #[test]
    fn serializes_absence_as_na_string() {
        assert_eq!(serde_json::to_string(&NaInt::na()).unwrap(), "\"na\"");
    }

    #[test]
    fn round_trips_through_json() {
        let known: NaInt = serde_json::from_str("7").unwrap();
        assert_eq!(known.value(), Some(7));
        let na: NaInt = serde_json::from_str("\"na\"").unwrap();
        assert_eq!(na.value(), None);
    }
}
