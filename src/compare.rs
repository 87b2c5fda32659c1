//! Symmetric difference of two lists by deep equality.

use crate::error::{FieldwiseError, Result};
use crate::list::List;
use crate::value::Reflect;

/// Elements present on one side only.
///
/// Presence is all that counts: an element found anywhere on the other side is
/// never reported, however many duplicates either side holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    /// Elements of the new list with no deep-equal element in the old list
    pub added: Vec<Box<dyn Reflect>>,
    /// Elements of the old list with no deep-equal element in the new list
    pub removed: Vec<Box<dyn Reflect>>,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Added elements downcast to `T`; elements of another type are left out
    pub fn added_as<T: Reflect + Clone>(&self) -> Vec<T> {
        downcast_all(&self.added)
    }

    /// Removed elements downcast to `T`; elements of another type are left out
    pub fn removed_as<T: Reflect + Clone>(&self) -> Vec<T> {
        downcast_all(&self.removed)
    }

    pub fn into_parts(self) -> (Vec<Box<dyn Reflect>>, Vec<Box<dyn Reflect>>) {
        (self.added, self.removed)
    }
}

/// Compare `new` against `old`.
///
/// Both lists are scanned pairwise, so the cost is proportional to the product
/// of their lengths. Results keep the order of the list they come from.
///
/// # Errors
/// Returns `NotSliceKind` if either argument is not a list
pub fn compare_slice(new: &dyn Reflect, old: &dyn Reflect) -> Result<Comparison> {
    let new_list = new
        .as_list()
        .ok_or_else(|| FieldwiseError::NotSliceKind(new.kind()))?;
    let old_list = old
        .as_list()
        .ok_or_else(|| FieldwiseError::NotSliceKind(old.kind()))?;

    Ok(Comparison {
        added: difference(new_list, old_list),
        removed: difference(old_list, new_list),
    })
}

fn difference(left: &dyn List, right: &dyn List) -> Vec<Box<dyn Reflect>> {
    left.iter()
        .filter(|element| !right.iter().any(|other| element.reflect_eq(other)))
        .map(|element| element.clone_reflect())
        .collect()
}

fn downcast_all<T: Reflect + Clone>(values: &[Box<dyn Reflect>]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| value.downcast_ref::<T>())
        .cloned()
        .collect()
}
