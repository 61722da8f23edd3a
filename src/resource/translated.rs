//! The resolver's output value.

use serde::Serialize;

use super::identifier::ResourceKind;
use super::model::{Channel, PathType, Team};
use super::path;
use super::permission::PermissionSet;

/// A resolved, permission-annotated resource path. Built once per resolution and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    pub(crate) kind: ResourceKind,
    pub(crate) physical_path: String,
    pub(crate) display_path: String,
    pub(crate) relative_path: String,
    pub(crate) resource_base_path: String,
    pub(crate) channel_display_path: Option<String>,
    pub(crate) permissions: PermissionSet,
    pub(crate) team: Team,
    pub(crate) channel: Option<Channel>,
    pub(crate) path_type: Option<PathType>,
    pub(crate) protected: bool,
}

impl ResolvedPath {
    pub fn kind(&self) -> ResourceKind { self.kind }
    pub fn physical_path(&self) -> &str { &self.physical_path }
    pub fn display_path(&self) -> &str { &self.display_path }
    /// Path below the resource root, slash-prefixed; `/` for the root itself.
    pub fn relative_path(&self) -> &str { &self.relative_path }
    /// `/<prefix>/<objectId>`
    pub fn resource_base_path(&self) -> &str { &self.resource_base_path }
    pub fn channel_display_path(&self) -> Option<&str> { self.channel_display_path.as_deref() }
    pub fn permissions(&self) -> &PermissionSet { &self.permissions }
    pub fn team(&self) -> &Team { &self.team }
    pub fn channel(&self) -> Option<&Channel> { self.channel.as_ref() }
    pub fn path_type(&self) -> Option<PathType> { self.path_type }
    /// Container that must not be deleted even when the principal could otherwise delete.
    pub fn is_protected(&self) -> bool { self.protected }

    /// Last segment of the display path.
    pub fn display_name(&self) -> &str {
        self.display_path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("")
    }

    pub fn type_tag(&self) -> Option<&'static str> {
        self.path_type.map(PathType::as_str)
    }
}

/// The most specific (last) `/<f|cf|wf>/<id>` pair contained in `p`.
pub fn containing_resource_root(p: &str) -> Option<String> {
    let segs = path::split_segments(p);
    segs.windows(2)
        .rev()
        .find(|w| ResourceKind::from_segment(&w[0]).is_some() && !w[1].is_empty() && w[1].bytes().all(|b| b.is_ascii_digit()))
        .map(|w| format!("/{}/{}", w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_root_picks_the_last_pair() {
        assert_eq!(containing_resource_root("/f/7/docs/x.txt").as_deref(), Some("/f/7"));
        assert_eq!(containing_resource_root("/cf/3/a/wf/12/b").as_deref(), Some("/wf/12"));
        assert_eq!(containing_resource_root("/f/7/cf/abc").as_deref(), Some("/f/7"));
        assert_eq!(containing_resource_root("/My Files/docs"), None);
        assert_eq!(containing_resource_root("/f"), None);
    }
}
