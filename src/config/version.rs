//! Shopify API versions.
//!
//! Shopify names stable releases after the quarter they ship in (`2024-01`,
//! `2024-04`, ...) and also exposes an `unstable` channel. A configured
//! version selects the `admin/api/{version}` path prefix.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::stable(2024, 10).unwrap());
/// assert_eq!(version.to_string(), "2024-10");
///
/// let unstable: ApiVersion = "unstable".parse().unwrap();
/// assert!(unstable > version);
///
/// assert!("2024-1".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A dated release, e.g. `2024-10`.
    Stable {
        /// Release year.
        year: u16,
        /// Release month, 1 to 12.
        month: u8,
    },
    /// The `unstable` channel.
    Unstable,
}

impl ApiVersion {
    /// Creates a dated version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] when the month is outside
    /// 1..=12 or the year does not have four digits.
    pub fn stable(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(1000..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year}-{month:02}"),
            });
        }
        Ok(Self::Stable { year, month })
    }

    /// Returns the most recent release this crate was written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::Stable {
            year: 2025,
            month: 10,
        }
    }

    /// Returns `false` for [`ApiVersion::Unstable`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Returns the REST path prefix for this version.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        format!("admin/api/{self}")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };

        // YYYY-MM, digits only
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::stable(year, month)
    }
}
