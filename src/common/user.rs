use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Opaque user identifier (a Discord snowflake).
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Chat mention form, e.g. `<@1234>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

/// Accepts a bare id (`1234`) or a mention (`<@1234>`, `<@!1234>`).
impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let raw = t
            .strip_prefix("<@")
            .and_then(|rest| rest.strip_suffix('>'))
            .map(|inner| inner.trim_start_matches('!'))
            .unwrap_or(t);

        raw.parse::<u64>()
            .map(UserId)
            .map_err(|_| format!("invalid user id: {t}"))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
