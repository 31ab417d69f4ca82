//! The [`Iterator`] types that can be created from a [`SimpleVec`]

mod into_iter;

pub use into_iter::IntoIter;

use core::iter::FromIterator;

use crate::SimpleVec;

impl<T> FromIterator<T> for SimpleVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(error) = self.try_grow_for(lower) {
            error.handle()
        }
        iter.for_each(|item| {
            self.push(item);
        });
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) { self.extend(iter.into_iter().copied()) }
}
