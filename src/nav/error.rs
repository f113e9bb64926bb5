// Boundary validation - rejects malformed descriptor trees before reconciling
use super::types::{NavDescriptor, NavKind};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("navigation item without an id")]
    EmptyId,
    #[error("navigation id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("navigation item `{id}` of type {kind:?} cannot have children")]
    UnexpectedChildren { id: String, kind: NavKind },
    #[error("unknown navigation item `{0}`")]
    UnknownItem(String),
    #[error("failed to parse navigation menu: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Checks a descriptor tree before it is handed to the reconciler.
///
/// A malformed update is rejected as a whole rather than partially applied.
pub fn validate(descriptors: &[NavDescriptor]) -> Result<(), NavError> {
    let mut seen = HashSet::new();
    validate_level(descriptors, &mut seen)
}

fn validate_level<'a>(
    descriptors: &'a [NavDescriptor],
    seen: &mut HashSet<&'a str>,
) -> Result<(), NavError> {
    for descriptor in descriptors {
        if descriptor.id.trim().is_empty() {
            return Err(NavError::EmptyId);
        }
        if !seen.insert(descriptor.id.as_str()) {
            return Err(NavError::DuplicateId(descriptor.id.clone()));
        }
        if !descriptor.kind.is_container() && !descriptor.children.is_empty() {
            return Err(NavError::UnexpectedChildren {
                id: descriptor.id.clone(),
                kind: descriptor.kind,
            });
        }
        validate_level(&descriptor.children, seen)?;
    }
    Ok(())
}
