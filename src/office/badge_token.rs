use std::{fmt, str::FromStr};

use anyhow::{Error, bail};

/// NFC tag code that identifies a person in the room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BadgeToken(String);

impl BadgeToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BadgeToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            bail!("badge token must not be empty");
        }

        Ok(BadgeToken(s.to_owned()))
    }
}
