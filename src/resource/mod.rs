//! Resource identifier resolution and access control.
//!
//! An identifier such as `/f/42/Reports/q1.pdf`, `/cf/17/notes.md` or
//! `/wf/9/index.md` is parsed once into a [`ResourceKind`], handed to the
//! variant that owns the prefix, and turned into a [`ResolvedPath`] carrying the
//! physical path, the display path and the principal's [`PermissionSet`].

pub mod path;
pub mod permission;
pub mod role;
pub mod identifier;
pub mod model;
pub mod lookup;
pub mod error;
pub mod translated;
pub mod variants;
pub mod resolver;

pub use path::{PathComponents, PathError, normalize, is_valid, all_parent_paths, contains_invalid_path};
pub use permission::{Capability, PermissionSet};
pub use role::{ChannelRole, PermissionLevel};
pub use identifier::{ResourceIdentifier, ResourceKind};
pub use model::{Team, Channel, ChannelMembership, ChannelPathMapping, PathType, ContextType, ChannelAssociation};
pub use lookup::{DataLookup, PermissionCalculator};
pub use error::ResolutionError;
pub use translated::{ResolvedPath, containing_resource_root};
pub use variants::{Resource, Collaborators, TeamFileResource, ChannelFileResource, ChannelWikiResource};
pub use resolver::Resolver;
