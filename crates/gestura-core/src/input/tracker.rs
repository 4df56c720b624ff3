//! Live set of active contacts.
//!
//! The tracker only stores contacts; it never classifies. The engine snapshots
//! the set before a mutation and hands both snapshots to the classifier.

use super::types::{ContactPoint, PointerId};
use gestura_geometry::Point;
use smallvec::SmallVec;

/// Contacts stored inline before the set spills to the heap.
const INLINE_CONTACTS: usize = 4;

/// Active contacts keyed by [`PointerId`].
///
/// Ids are unique. Contacts keep insertion order, so the first two entries are
/// the two earliest still-active contacts; only those take part in
/// pinch/rotate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerSet {
    contacts: SmallVec<[ContactPoint; INLINE_CONTACTS]>,
}

impl PointerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: PointerId) -> Option<&ContactPoint> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactPoint> {
        self.contacts.iter()
    }

    /// The only contact, if exactly one is active.
    pub fn single(&self) -> Option<&ContactPoint> {
        match self.contacts.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// The two earliest active contacts, if at least two are active.
    pub fn pair(&self) -> Option<(&ContactPoint, &ContactPoint)> {
        match self.contacts.as_slice() {
            [first, second, ..] => Some((first, second)),
            _ => None,
        }
    }

    fn position_of(&self, id: PointerId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id == id)
    }
}

/// Whether [`PointerTracker::add_or_update`] created or moved a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChange {
    Added,
    Moved,
}

/// Maintains the [`PointerSet`].
///
/// No validation beyond overwrite-by-id; removing an unknown id is a no-op.
#[derive(Debug, Default)]
pub struct PointerTracker {
    set: PointerSet,
}

impl PointerTracker {
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new contact or moves an existing one.
    pub fn add_or_update(&mut self, id: PointerId, position: Point) -> ContactChange {
        match self.set.position_of(id) {
            Some(index) => {
                self.set.contacts[index].move_to(position);
                ContactChange::Moved
            }
            None => {
                self.set.contacts.push(ContactPoint::new(id, position));
                ContactChange::Added
            }
        }
    }

    /// Removes and returns a contact. Unknown ids return `None`.
    pub fn remove(&mut self, id: PointerId) -> Option<ContactPoint> {
        let index = self.set.position_of(id)?;
        Some(self.set.contacts.remove(index))
    }

    pub fn current(&self) -> &PointerSet {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Drops every contact.
    pub fn clear(&mut self) {
        self.set.contacts.clear();
    }
}
