//! Macro for defining typed, prefixed ULID identifiers.

/// Defines a newtype over [`Ulid`](crate::Ulid) whose text form is
/// `{prefix}_{ulid}`.
///
/// The generated type gets:
/// - a `PREFIX` constant
/// - `new()` drawing from the process-wide generator
/// - `from_ulid()` / `ulid()` conversions
/// - strict `parse()` reporting [`IdError`](crate::IdError)
/// - `Display`, `FromStr`, serde, `Ord` and `Hash`
///
/// # Example
///
/// ```
/// ulid_codec::define_id!(OrderId, "ord");
///
/// let id = OrderId::new();
/// let parsed: OrderId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// assert!(id.to_string().starts_with("ord_"));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A typed ULID with a fixed text prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Ulid);

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID with a freshly generated ULID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Ulid::new())
            }

            /// Wraps an existing ULID.
            #[must_use]
            pub const fn from_ulid(ulid: $crate::Ulid) -> Self {
                Self(ulid)
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn ulid(&self) -> $crate::Ulid {
                self.0
            }

            /// Parses `{prefix}_{ulid}`.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                if s.is_empty() {
                    return Err($crate::IdError::Empty);
                }

                let Some((prefix, ulid)) = s.split_once('_') else {
                    return Err($crate::IdError::MissingSeparator);
                };

                if prefix != Self::PREFIX {
                    return Err($crate::IdError::InvalidPrefix {
                        expected: Self::PREFIX,
                        actual: prefix.to_string(),
                    });
                }

                Ok(Self($crate::Ulid::parse(ulid)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}_{}", Self::PREFIX, self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::Ulid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
