use thiserror::Error;

/// Why an identifier could not be resolved. Each variant carries the identifier as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("malformed resource identifier '{identifier}': {reason}")]
    MalformedIdentifier { identifier: String, reason: &'static str },
    #[error("unknown team {team_id} for '{identifier}'")]
    UnknownTeam { identifier: String, team_id: i64 },
    #[error("unknown channel path {path_id} for '{identifier}'")]
    UnknownChannelPath { identifier: String, path_id: i64 },
    #[error("channel path {path_id} for '{identifier}' is not a {expected} path")]
    WrongPathType { identifier: String, path_id: i64, expected: &'static str },
    #[error("access to '{identifier}' is forbidden: {reason}")]
    Forbidden { identifier: String, reason: &'static str },
    #[error("channel behind '{identifier}' no longer exists")]
    ChannelGone { identifier: String },
}

impl ResolutionError {
    pub(crate) fn malformed(identifier: &str, reason: &'static str) -> Self {
        ResolutionError::MalformedIdentifier { identifier: identifier.to_string(), reason }
    }

    pub(crate) fn forbidden(identifier: &str, reason: &'static str) -> Self {
        ResolutionError::Forbidden { identifier: identifier.to_string(), reason }
    }

    pub fn identifier(&self) -> &str {
        match self {
            ResolutionError::MalformedIdentifier { identifier, .. }
            | ResolutionError::UnknownTeam { identifier, .. }
            | ResolutionError::UnknownChannelPath { identifier, .. }
            | ResolutionError::WrongPathType { identifier, .. }
            | ResolutionError::Forbidden { identifier, .. }
            | ResolutionError::ChannelGone { identifier } => identifier.as_str(),
        }
    }

    /// Short stable tag, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionError::MalformedIdentifier { .. } => "malformed_identifier",
            ResolutionError::UnknownTeam { .. } => "unknown_team",
            ResolutionError::UnknownChannelPath { .. } => "unknown_channel_path",
            ResolutionError::WrongPathType { .. } => "wrong_path_type",
            ResolutionError::Forbidden { .. } => "forbidden",
            ResolutionError::ChannelGone { .. } => "channel_gone",
        }
    }

    /// Everything but a malformed identifier: callers must not tell these apart externally.
    pub fn is_not_found_or_denied(&self) -> bool {
        !matches!(self, ResolutionError::MalformedIdentifier { .. })
    }
}
