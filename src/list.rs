//! Homogeneous collections of reflected values.

use crate::value::{Kind, Reflect};

/// A growable, homogeneous collection viewed through `Reflect`.
///
/// Implemented for `Vec<T>`. The element type's `Default` value is the zero
/// value used when migrating into a collection and for reporting its element kind.
pub trait List: Reflect {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Kind of the element type, known even when the collection is empty
    fn element_kind(&self) -> Kind;

    fn element_type_name(&self) -> &'static str;

    /// A new zero-valued element of the element type
    fn new_element(&self) -> Box<dyn Reflect>;

    /// Append `value` if it is of the element type. Returns `false` otherwise.
    fn push(&mut self, value: Box<dyn Reflect>) -> bool;

    fn clear(&mut self);

    /// Keep the elements whose flag in `keep` is `true`, preserving order.
    /// Elements past the end of `keep` are kept.
    fn retain_mask(&mut self, keep: &[bool]);
}

impl<'a> dyn List + 'a {
    /// Iterate the elements in order
    pub fn iter(&self) -> ListIter<'_> {
        ListIter {
            list: self,
            index: 0,
        }
    }
}

/// Iterator over the elements of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let value = list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> Reflect for Vec<T>
where
    T: Reflect + Clone + PartialEq + Default,
{
    fn kind(&self) -> Kind {
        Kind::List
    }

    crate::__reflect_common!();

    fn as_list(&self) -> Option<&dyn List> {
        Some(self)
    }

    fn as_list_mut(&mut self) -> Option<&mut dyn List> {
        Some(self)
    }
}

impl<T> List for Vec<T>
where
    T: Reflect + Clone + PartialEq + Default,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }

    fn element_kind(&self) -> Kind {
        T::default().kind()
    }

    fn element_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn new_element(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> bool {
        match value.into_any().downcast::<T>() {
            Ok(value) => {
                Vec::push(self, *value);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn retain_mask(&mut self, keep: &[bool]) {
        let mut flags = keep.iter().copied();
        self.retain(|_| flags.next().unwrap_or(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_of_empty_list() {
        let strings: Vec<String> = Vec::new();
        let numbers: Vec<i32> = Vec::new();

        assert_eq!(strings.element_kind(), Kind::String);
        assert_eq!(numbers.element_kind(), Kind::Int32);
        assert!(List::is_empty(&numbers));
    }

    #[test]
    fn test_push_checks_element_type() {
        let mut numbers: Vec<i32> = vec![1];

        assert!(List::push(&mut numbers, Box::new(2i32)));
        assert!(!List::push(&mut numbers, Box::new(3i64)));
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_iter_and_get() {
        let numbers: Vec<i32> = vec![3, 4, 5];
        let list: &dyn List = &numbers;

        let collected: Vec<i64> = list.iter().filter_map(|v| v.as_int()).collect();
        assert_eq!(collected, vec![3, 4, 5]);
        assert!(list.get(3).is_none());
    }

    #[test]
    fn test_retain_mask_preserves_order() {
        let mut numbers: Vec<i32> = vec![1, 2, 3, 4];

        numbers.retain_mask(&[true, false, true]);
        assert_eq!(numbers, vec![1, 3, 4]);
    }

    #[test]
    fn test_new_element_is_zero_value() {
        let numbers: Vec<i32> = vec![9];
        let element = numbers.new_element();

        assert_eq!(element.downcast_ref::<i32>(), Some(&0));
    }
}
