// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Ordered list of unique items.
//!
//! This module provides the container backing both the person list and the
//! event list. No two elements of a [`UniqueList`] are ever equal, and every
//! failed operation leaves the list exactly as it was.
//!
//! The list publishes its contents through a [`ReadOnlyView`], a shared handle
//! that is refreshed after every mutation so the UI always renders the
//! current state without being able to change it.

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use crate::model::{ListError, ListItem};

pub(crate) struct UniqueList<T: ListItem> {
    items: Vec<T>,
    view: Arc<Mutex<Vec<T>>>,
}

impl<T: ListItem> UniqueList<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            view: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns true if the list contains an item equal to `item`.
    pub(crate) fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Appends a copy of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if an equal item is already present.
    pub(crate) fn add(&mut self, item: &T) -> Result<(), ListError> {
        if self.contains(item) {
            return Err(ListError::Duplicate(T::KIND));
        }

        self.items.push(item.clone());
        self.sync_view();
        Ok(())
    }

    /// Inserts a copy of `item` at `position`, clamped to the list length.
    ///
    /// Only used to put back an item removed by [`UniqueList::remove`], so no
    /// duplicate check is made.
    pub(crate) fn insert_at(&mut self, position: usize, item: &T) {
        let position = position.min(self.items.len());
        self.items.insert(position, item.clone());
        self.sync_view();
    }

    /// Replaces `target` with a copy of `replacement`, keeping its position.
    ///
    /// # Errors
    ///
    /// * [`ListError::NotFound`] if `target` is not in the list.
    /// * [`ListError::Duplicate`] if `replacement` equals some other item.
    pub(crate) fn set_item(&mut self, target: &T, replacement: &T) -> Result<(), ListError> {
        let position = self
            .position(target)
            .ok_or(ListError::NotFound(T::KIND))?;

        if target != replacement && self.contains(replacement) {
            return Err(ListError::Duplicate(T::KIND));
        }

        self.items[position] = replacement.clone();
        self.sync_view();
        Ok(())
    }

    /// Removes the item equal to `item` and returns the position it held.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no such item exists.
    pub(crate) fn remove(&mut self, item: &T) -> Result<usize, ListError> {
        let position = self.position(item).ok_or(ListError::NotFound(T::KIND))?;

        self.items.remove(position);
        self.sync_view();
        Ok(position)
    }

    /// Replaces the whole contents with copies of `items`.
    ///
    /// The replacement is built separately first, so on error the list is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if `items` holds two equal items.
    pub(crate) fn set_items(&mut self, items: &[T]) -> Result<(), ListError> {
        let mut replacement = Self::new();
        for item in items {
            replacement.add(item)?;
        }

        self.replace_with(&replacement);
        Ok(())
    }

    /// Replaces the whole contents with those of another unique list.
    pub(crate) fn replace_with(&mut self, other: &UniqueList<T>) {
        self.items.clone_from(&other.items);
        self.sync_view();
    }

    /// Stable sort by each item's sort key.
    pub(crate) fn sort(&mut self) {
        self.items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.sync_view();
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.sync_view();
    }

    /// A read-only handle that follows every change made to this list.
    pub(crate) fn view(&self) -> ReadOnlyView<T> {
        ReadOnlyView {
            items: Arc::clone(&self.view),
        }
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    fn sync_view(&self) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        view.clone_from(&self.items);
    }
}

impl<T: ListItem> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A clone owns its own view, otherwise a snapshot taken for undo would keep
// publishing into the live list's view.
impl<T: ListItem> Clone for UniqueList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            view: Arc::new(Mutex::new(self.items.clone())),
        }
    }
}

impl<T: ListItem> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: ListItem + fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T: ListItem> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Read-only projection of a [`UniqueList`] for display.
pub(crate) struct ReadOnlyView<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> ReadOnlyView<T> {
    /// Runs `f` against the current contents.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        f(&items)
    }
}

impl<T> Clone for ReadOnlyView<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        seq: usize,
    }

    impl ListItem for Item {
        const KIND: &'static str = "item";

        fn sort_key(&self) -> String {
            self.name.clone()
        }
    }

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            seq: 0,
        }
    }

    fn list_of(names: &[&str]) -> UniqueList<Item> {
        let mut list = UniqueList::new();
        for name in names {
            list.add(&item(name)).unwrap();
        }
        list
    }

    fn names(list: &UniqueList<Item>) -> Vec<String> {
        list.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut list = list_of(&["alice", "bob"]);

        assert_eq!(list.add(&item("alice")), Err(ListError::Duplicate("item")));
        assert_eq!(names(&list), vec!["alice", "bob"]);
    }

    #[test]
    fn remove_returns_former_position() {
        let mut list = list_of(&["alice", "bob", "carl"]);

        assert_eq!(list.remove(&item("bob")), Ok(1));
        assert_eq!(names(&list), vec!["alice", "carl"]);
    }

    #[test]
    fn remove_missing_item_fails() {
        let mut list = list_of(&["alice"]);

        assert_eq!(list.remove(&item("bob")), Err(ListError::NotFound("item")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_at_restores_removed_item_in_place() {
        let mut list = list_of(&["alice", "bob", "carl"]);
        let position = list.remove(&item("bob")).unwrap();

        list.insert_at(position, &item("bob"));

        assert_eq!(names(&list), vec!["alice", "bob", "carl"]);
    }

    #[test]
    fn insert_at_clamps_position() {
        let mut list = list_of(&["alice"]);
        list.insert_at(10, &item("bob"));
        assert_eq!(names(&list), vec!["alice", "bob"]);
    }

    #[test]
    fn set_item_keeps_position() {
        let mut list = list_of(&["alice", "bob", "carl"]);

        list.set_item(&item("bob"), &item("bart")).unwrap();

        assert_eq!(names(&list), vec!["alice", "bart", "carl"]);
    }

    #[test]
    fn set_item_with_itself_is_allowed() {
        let mut list = list_of(&["alice", "bob"]);
        assert_eq!(list.set_item(&item("bob"), &item("bob")), Ok(()));
    }

    #[test]
    fn set_item_errors() {
        let mut list = list_of(&["alice", "bob"]);

        assert_eq!(
            list.set_item(&item("zed"), &item("zoe")),
            Err(ListError::NotFound("item"))
        );
        assert_eq!(
            list.set_item(&item("bob"), &item("alice")),
            Err(ListError::Duplicate("item"))
        );
        assert_eq!(names(&list), vec!["alice", "bob"]);
    }

    #[test]
    fn set_items_is_all_or_nothing() {
        let mut list = list_of(&["alice"]);

        let result = list.set_items(&[item("bob"), item("carl"), item("bob")]);

        assert_eq!(result, Err(ListError::Duplicate("item")));
        assert_eq!(names(&list), vec!["alice"]);

        list.set_items(&[item("bob"), item("carl")]).unwrap();
        assert_eq!(names(&list), vec!["bob", "carl"]);
    }

    #[test]
    fn view_follows_mutations() {
        let mut list = list_of(&["bob"]);
        let view = list.view();

        list.add(&item("alice")).unwrap();
        assert_eq!(view.with(<[_]>::len), 2);

        list.sort();
        assert_eq!(view.with(|items| items.first().cloned()), Some(item("alice")));

        list.clear();
        assert!(view.with(<[_]>::is_empty));
    }

    #[test]
    fn clone_does_not_share_view() {
        let list = list_of(&["alice"]);
        let view = list.view();

        let mut copy = list.clone();
        copy.add(&item("bob")).unwrap();

        assert_eq!(view.with(<[_]>::to_vec), vec![item("alice")]);
        assert_eq!(copy.view().with(<[_]>::len), 2);
        assert_ne!(list, copy);
    }

    fn arb_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]{1,2}", 0..20)
    }

    proptest! {
        /// Adding an item that is already present never changes the list.
        #[test]
        fn duplicate_add_leaves_list_unchanged(names in arb_names()) {
            let mut list = UniqueList::new();
            for name in &names {
                let _ = list.add(&item(name));
            }
            let before = list.clone();

            for existing in before.iter() {
                prop_assert_eq!(list.add(existing), Err(ListError::Duplicate("item")));
            }
            prop_assert_eq!(&list, &before);
        }

        /// Sorting orders by name and keeps the insertion order of items with
        /// the same name.
        #[test]
        fn sort_is_ordered_and_stable(names in arb_names()) {
            let mut list = UniqueList::new();
            for (seq, name) in names.iter().enumerate() {
                list.add(&Item { name: name.clone(), seq }).unwrap();
            }

            list.sort();

            for pair in list.as_slice().windows(2) {
                prop_assert!(pair[0].name <= pair[1].name);
                if pair[0].name == pair[1].name {
                    prop_assert!(pair[0].seq < pair[1].seq);
                }
            }
            prop_assert_eq!(list.len(), names.len());
        }

        /// `set_items` succeeds exactly when the source has no duplicates.
        #[test]
        fn set_items_replaces_or_fails_whole(names in arb_names()) {
            let mut list = list_of(&["original"]);
            let source: Vec<Item> = names.iter().map(|n| item(n)).collect();

            let mut distinct = names.clone();
            distinct.sort();
            distinct.dedup();

            match list.set_items(&source) {
                Ok(()) => {
                    prop_assert_eq!(distinct.len(), names.len());
                    prop_assert_eq!(list.as_slice(), source.as_slice());
                }
                Err(err) => {
                    prop_assert_eq!(err, ListError::Duplicate("item"));
                    prop_assert!(distinct.len() < names.len());
                    prop_assert_eq!(list.as_slice(), &[item("original")][..]);
                }
            }
        }
    }
}
