// Author: Dustin Pilgrim
// License: MIT

use std::str::FromStr;

use super::SpecialCharacter;
use crate::error::Error;

impl TryFrom<char> for SpecialCharacter {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        SpecialCharacter::ALL
            .into_iter()
            .find(|s| s.as_char() == ch)
            .ok_or_else(|| Error::InvalidOption {
                message: format!(
                    "special character must be one of '#', '$', '%', '&', '@', got '{}'",
                    ch
                ),
            })
    }
}

impl FromStr for SpecialCharacter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => SpecialCharacter::try_from(ch),
            _ => Err(Error::InvalidOption {
                message: format!(
                    "special character must be a single character out of '#', '$', '%', '&', '@', got \"{}\"",
                    s
                ),
            }),
        }
    }
}

impl From<SpecialCharacter> for char {
    fn from(special: SpecialCharacter) -> Self {
        special.as_char()
    }
}
