//! Enumeration of sequences as index-keyed entries.

use std::{borrow::Cow, collections::VecDeque};

use crate::source::Enumerable;

fn indexed<'a, V: 'a>(
    items: impl Iterator<Item = &'a V>,
) -> impl Iterator<Item = (Cow<'a, str>, &'a V)> {
    items
        .enumerate()
        .map(|(index, value)| (Cow::Owned(index.to_string()), value))
}

impl<V> Enumerable for [V] {
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        indexed(self.iter())
    }
}

impl<V, const N: usize> Enumerable for [V; N] {
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        indexed(self.iter())
    }
}

impl<V> Enumerable for Vec<V> {
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        indexed(self.iter())
    }
}

impl<V> Enumerable for VecDeque<V> {
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        indexed(self.iter())
    }
}
