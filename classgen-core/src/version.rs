use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Generator version, stamped into the header of every generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Version of the running generator, taken from the crate metadata.
    pub fn current() -> Self {
        env!("CARGO_PKG_VERSION").parse().unwrap_or_default()
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: parts[2].parse().map_err(|_| "invalid patch")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!("0.3.0".parse::<Version>().unwrap(), Version::new(0, 3, 0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("a.b.c".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_current_matches_crate_version() {
        assert_eq!(
            Version::current().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_serialize_as_string() {
        #[derive(Serialize)]
        struct Stamp {
            version: Version,
        }
        let stamp = Stamp {
            version: Version::new(1, 2, 3),
        };
        let toml = toml::to_string(&stamp).unwrap();
        assert_eq!(toml.trim(), r#"version = "1.2.3""#);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Stamp {
            version: Version,
        }
        let stamp: Stamp = toml::from_str(r#"version = "1.2.3""#).unwrap();
        assert_eq!(stamp.version, Version::new(1, 2, 3));
    }
}
