//! List-to-list migration.
//!
//! Converts a list of one record type into a list of another by transforming
//! every element into a fresh zero-valued destination element.

use crate::error::ElementError;
use crate::list::List;
use crate::tag_parser::global_tag_parsers;
use crate::transform::Transformer;
use crate::value::Reflect;

impl Transformer<'_> {
    /// Append one transformed element to `dest` for every element of `source`,
    /// in source order.
    ///
    /// Elements are appended even when their transform fails part-way; the
    /// failures are returned so callers can decide whether a partial element
    /// is acceptable. If either argument is not a list nothing happens.
    pub fn migrate(&self, source: &dyn Reflect, dest: &mut dyn Reflect) -> Vec<ElementError> {
        let (Some(source), Some(dest)) = (source.as_list(), dest.as_list_mut()) else {
            tracing::debug!("Skipping migrate: both arguments must be lists");
            return Vec::new();
        };

        self.migrate_list(source, dest)
    }

    pub(crate) fn migrate_list(&self, source: &dyn List, dest: &mut dyn List) -> Vec<ElementError> {
        let mut failures = Vec::new();

        for (index, element) in source.iter().enumerate() {
            let mut target = dest.new_element();

            match (element.as_record(), target.as_record_mut()) {
                (Some(from), Some(to)) => {
                    if let Err(source) = self.transform(from, to) {
                        failures.push(ElementError { index, source });
                    }
                }
                _ => {
                    tracing::debug!(
                        "Element {} appended as zero value: {} into {} is not record to record",
                        index,
                        element.type_name(),
                        dest.element_type_name()
                    );
                }
            }

            dest.push(target);
        }

        failures
    }
}

/// Migrate `source` into `dest` using the process-wide tag parser registry.
/// See [`Transformer::migrate`].
pub fn migrate_slice(source: &dyn Reflect, dest: &mut dyn Reflect) -> Vec<ElementError> {
    let parsers = global_tag_parsers();
    Transformer::new(&parsers).migrate(source, dest)
}
