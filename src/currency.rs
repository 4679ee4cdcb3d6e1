//! Currencies the price API can report in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Dkk,
    Eur,
    Nok,
    Pln,
    Sek,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Dkk,
        Currency::Eur,
        Currency::Nok,
        Currency::Pln,
        Currency::Sek,
    ];

    /// The ISO 4217 code sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Dkk => "DKK",
            Currency::Eur => "EUR",
            Currency::Nok => "NOK",
            Currency::Pln => "PLN",
            Currency::Sek => "SEK",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown currency: {}. Expected one of DKK, EUR, NOK, PLN, SEK.",
                    s
                )
            })
    }
}
