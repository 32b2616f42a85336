/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 13/5/25
 ******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broadcast network a channel belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Network {
    Kanto,
    Kansai,
    Nagoya,
    Hokaido,
    Other,
    #[serde(rename = "BS")]
    Bs,
    #[serde(rename = "CS")]
    Cs,
    #[serde(rename = "CS124")]
    Cs124,
}

impl Network {
    pub const ALL: [Network; 8] = [
        Network::Kanto,
        Network::Kansai,
        Network::Nagoya,
        Network::Hokaido,
        Network::Other,
        Network::Bs,
        Network::Cs,
        Network::Cs124,
    ];

    /// Wire value sent in the `network` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Kanto => "Kanto",
            Network::Kansai => "Kansai",
            Network::Nagoya => "Nagoya",
            Network::Hokaido => "Hokaido",
            Network::Other => "Other",
            Network::Bs => "BS",
            Network::Cs => "CS",
            Network::Cs124 => "CS124",
        }
    }

    /// Name shown by the provider's web UI.
    pub fn description(&self) -> &'static str {
        match self {
            Network::Kanto => "关东广域",
            Network::Kansai => "近畿（关西）广域",
            Network::Nagoya => "中京名古屋广域",
            Network::Hokaido => "北海道",
            Network::Other => "其他地方频道",
            Network::Bs => "BS卫星",
            Network::Cs => "CS110",
            Network::Cs124 => "CS124",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| format!("unknown network: {s}"))
    }
}
