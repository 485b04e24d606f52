//! Table generation
//!
//! `code_table!` declares a `#[repr(u8)]` enum together with its
//! code/name lookups in both directions.

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            /// Every member in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric code
            #[inline]
            pub const fn code(self) -> u32 {
                self as u32
            }

            /// Symbolic name
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Look up a member by numeric code
            pub const fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Look up a member by symbolic name (case sensitive)
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::EventsError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or($crate::EventsError::UnknownCode {
                    table: stringify!($name),
                    code,
                })
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::EventsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::EventsError::UnknownName {
                    table: stringify!($name),
                    name: s.to_string(),
                })
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.code()
            }
        }
    };
}
