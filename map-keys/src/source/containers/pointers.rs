//! Enumeration through references and smart pointers.

use std::{borrow::Cow, rc::Rc, sync::Arc};

use crate::source::Enumerable;

macro_rules! impl_enumerable_deref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Enumerable + ?Sized> Enumerable for $ty {
                type Value = T::Value;

                fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &T::Value)> {
                    (**self).own_entries()
                }
            }
        )*
    };
}

impl_enumerable_deref!(&T, Box<T>, Rc<T>, Arc<T>);
