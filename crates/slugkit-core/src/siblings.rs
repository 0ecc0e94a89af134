//! Previous/next navigation over an ordered sequence of records.
//!
//! [`link`] builds a side-table of neighbour indices for a borrowed slice.
//! The records themselves are never touched, and every accessor hands back a
//! reference into the original slice, so asking for the same neighbour twice
//! yields the same reference.
use crate::record::RecordLike;

/// Neighbour positions for one element of the linked sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

/// Navigation view returned by [`link`].
#[derive(Debug, Clone)]
pub struct Siblings<'a, T> {
    items: &'a [T],
    links: Vec<Link>,
}

/// Links every element of `items` to its neighbours.
///
/// For position `i`, the previous element is `items[i - 1]` (none at the
/// front) and the next is `items[i + 1]` (none at the back).
pub fn link<T>(items: &[T]) -> Siblings<'_, T> {
    let len = items.len();
    let links = (0..len)
        .map(|i| Link {
            prev: i.checked_sub(1),
            next: (i + 1 < len).then_some(i + 1),
        })
        .collect();
    Siblings { items, links }
}

impl<'a, T> Siblings<'a, T> {
    /// Number of linked elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Previous element of the element at `index`.
    pub fn prev_at(&self, index: usize) -> Option<&'a T> {
        let items = self.items;
        self.links
            .get(index)
            .and_then(|l| l.prev)
            .and_then(|p| items.get(p))
    }

    /// Next element of the element at `index`.
    pub fn next_at(&self, index: usize) -> Option<&'a T> {
        let items = self.items;
        self.links
            .get(index)
            .and_then(|l| l.next)
            .and_then(|n| items.get(n))
    }

    /// Position of `item` in the sequence, matched by reference identity.
    ///
    /// An equal value stored elsewhere is not found; only references into the
    /// linked slice are. Elements of a zero-sized type share one address and
    /// cannot be told apart, so for them this always returns `None`; use the
    /// index-based accessors instead.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        if size_of::<T>() == 0 {
            return None;
        }
        self.items.iter().position(|x| std::ptr::eq(x, item))
    }

    /// Previous element of `item`, which must be a reference into the linked
    /// slice.
    pub fn prev(&self, item: &T) -> Option<&'a T> {
        self.position_of(item).and_then(|i| self.prev_at(i))
    }

    /// Next element of `item`, which must be a reference into the linked
    /// slice.
    pub fn next(&self, item: &T) -> Option<&'a T> {
        self.position_of(item).and_then(|i| self.next_at(i))
    }

    /// Iterates `(element, previous, next)` in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, Option<&'a T>, Option<&'a T>)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (item, self.prev_at(i), self.next_at(i)))
    }
}

/// Neighbour identities for one record, as produced by [`link_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLink<Id> {
    /// Identity of the previous record, if it has one.
    pub prev: Option<Id>,
    /// Identity of the next record, if it has one.
    pub next: Option<Id>,
}

/// Returns the neighbour identities of every record, in sequence order.
pub fn link_ids<R>(records: &[R]) -> Vec<NavigationLink<R::Id>>
where
    R: RecordLike,
    R::Id: Clone,
{
    let view = link(records);
    view.iter()
        .map(|(_, prev, next)| NavigationLink {
            prev: prev.and_then(R::id).cloned(),
            next: next.and_then(R::id).cloned(),
        })
        .collect()
}
