//! Closed enumerations for quiz topics and page modes.

use serde::{Deserialize, Serialize};

/// One of the five fixed subject areas tracked in the progress record.
///
/// This is a closed enumeration, not an extensible registry: the progress
/// record has exactly one field per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Basic,
    IpAddress,
    Routing,
    Vlan,
    Wireless,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Basic,
        Topic::IpAddress,
        Topic::Routing,
        Topic::Vlan,
        Topic::Wireless,
    ];

    /// URL path segment for this topic's quiz pages.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Topic::Basic => "basic",
            Topic::IpAddress => "ip-address",
            Topic::Routing => "routing",
            Topic::Vlan => "vlan",
            Topic::Wireless => "wireless",
        }
    }

    pub fn parse_slug(slug: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.as_slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Topic::Basic => "Network Basics",
            Topic::IpAddress => "IP Addressing",
            Topic::Routing => "Routing",
            Topic::Vlan => "VLANs",
            Topic::Wireless => "Wireless LAN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Topic::Basic => "How devices, switches and routers fit together",
            Topic::IpAddress => "Addresses, subnet masks and network classes",
            Topic::Routing => "Guiding packets between networks",
            Topic::Vlan => "Splitting one switch into many networks",
            Topic::Wireless => "SSIDs, channels and Wi-Fi security",
        }
    }
}

/// Page variant: tutorial-style questions or applied-scenario questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Learn,
    Challenge,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Learn, Mode::Challenge];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Mode::Learn => "learn",
            Mode::Challenge => "challenge",
        }
    }

    pub fn parse_slug(slug: &str) -> Option<Mode> {
        Mode::ALL.iter().copied().find(|m| m.as_slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Learn => "Learn",
            Mode::Challenge => "Challenge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_slug_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse_slug(topic.as_slug()), Some(topic));
        }
        assert_eq!(Topic::parse_slug("ipAddress"), None);
        assert_eq!(Topic::parse_slug(""), None);
    }

    #[test]
    fn test_mode_slug_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse_slug(mode.as_slug()), Some(mode));
        }
        assert_eq!(Mode::parse_slug("quiz"), None);
    }

    #[test]
    fn test_topic_slugs_are_distinct() {
        let slugs: std::collections::HashSet<_> =
            Topic::ALL.iter().map(|t| t.as_slug()).collect();
        assert_eq!(slugs.len(), Topic::ALL.len());
    }
}
