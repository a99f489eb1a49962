//! Action discriminants used for subscription filtering.

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Discriminant identifying an action variant.
///
/// Subscriptions filter on kinds rather than on runtime type identity, so
/// a single enum action can report a different kind for each of its
/// variants while a plain struct action can report one tied to its type.
///
/// Kinds made with [`ActionKind::new`] match when their tags are equal.
/// Kinds made with [`ActionKind::of`] match only kinds of the same Rust
/// type; their tag is the type name and only serves display. A derived kind
/// never matches a tagged one, and a derived kind read back through serde
/// becomes a tagged kind, so persisted filters should use explicit tags.
///
/// # Example
///
/// ```rust
/// use unistore::core::ActionKind;
///
/// struct Increment;
///
/// let derived = ActionKind::of::<Increment>();
/// let explicit = ActionKind::new("counter/reset");
///
/// assert_ne!(derived, explicit);
/// assert_eq!(explicit.as_str(), "counter/reset");
/// assert_eq!(ActionKind::of::<Increment>(), derived);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKind {
    tag: Cow<'static, str>,
    #[serde(skip)]
    type_id: Option<TypeId>,
}

impl ActionKind {
    /// Create a kind from an explicit tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            type_id: None,
        }
    }

    /// Derive the kind of a Rust type.
    ///
    /// Equality is decided by the type's `TypeId`; the type name is kept
    /// as the tag for display.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            tag: Cow::Borrowed(std::any::type_name::<T>()),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Whether this kind was derived from a Rust type.
    pub fn is_derived(&self) -> bool {
        self.type_id.is_some()
    }
}

impl PartialEq for ActionKind {
    fn eq(&self, other: &Self) -> bool {
        match (self.type_id, other.type_id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.tag == other.tag,
            _ => false,
        }
    }
}

impl Eq for ActionKind {}

impl Hash for ActionKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.type_id {
            Some(id) => id.hash(state),
            None => self.tag.hash(state),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&'static str> for ActionKind {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ActionKind {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}
