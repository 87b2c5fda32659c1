//! Struct-to-struct transformation by field name.
//!
//! Copies every field of a source record into the destination field of the same
//! name. Nested records are transformed recursively, lists of records are
//! migrated element by element and tagged lists of strings are run through the
//! registered tag parser. Everything else is assigned directly when the concrete
//! types are identical.

use crate::config::{MigrateErrorPolicy, TransformConfig};
use crate::error::{FieldwiseError, Result};
use crate::list::List;
use crate::record::Record;
use crate::tag_parser::{global_tag_parsers, TagParsers};
use crate::value::{Kind, Reflect};

/// Runs transformations against an explicit tag parser registry and configuration.
///
/// # Example
///
/// ```ignore
/// use fieldwise::{TagParsers, Transformer};
///
/// let mut parsers = TagParsers::new();
/// parsers.register("parse_ids", |values: &[String]| {
///     values.iter().filter_map(|v| v.parse().ok()).collect::<Vec<i64>>()
/// })?;
///
/// let transformer = Transformer::new(&parsers);
/// let mut dto = OrderDto::default();
/// transformer.transform(&order, &mut dto)?;
/// ```
pub struct Transformer<'a> {
    parsers: &'a TagParsers,
    config: TransformConfig,
}

impl<'a> Transformer<'a> {
    pub fn new(parsers: &'a TagParsers) -> Self {
        Self {
            parsers,
            config: TransformConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn parsers(&self) -> &TagParsers {
        self.parsers
    }

    /// Copy same-named fields from `source` into `dest`.
    ///
    /// Destination fields without a source counterpart are left untouched, as
    /// are fields whose concrete types differ under an equal kind.
    ///
    /// # Errors
    ///
    /// * `ParamKindMismatch` - a same-named field has a different kind
    /// * `SliceElementKindMismatch` - a list of records meets a destination
    ///   list whose elements are not records
    /// * `TagParserOutput` - a tag parser's output does not fit the destination field
    ///
    /// Fields copied before the failure stay copied.
    pub fn transform(&self, source: &dyn Record, dest: &mut dyn Record) -> Result<()> {
        let dest_name = dest.record_name();

        for name in param_names(source) {
            let Some(from) = source.field(name) else {
                continue;
            };
            let Some(to) = dest.field_mut(name) else {
                tracing::trace!("Skipping field '{}': not present on {}", name, dest_name);
                continue;
            };

            if from.kind() != to.kind() {
                return Err(FieldwiseError::ParamKindMismatch {
                    field: name.to_string(),
                    source_kind: from.kind(),
                    dest_kind: to.kind(),
                });
            }

            match from.kind() {
                Kind::Record => {
                    if let (Some(from), Some(to)) = (from.as_record(), to.as_record_mut()) {
                        self.transform(from, to)?;
                    }
                    continue;
                }
                Kind::List => {
                    let tag = source.descriptor(name).and_then(|descriptor| descriptor.tag);
                    if self.transform_list(name, tag, from, to)? {
                        continue;
                    }
                }
                _ => {}
            }

            assign_field(name, from, to);
        }

        Ok(())
    }

    /// Handle the list-specific branches. Returns `false` when the field should
    /// fall through to direct assignment.
    fn transform_list(
        &self,
        name: &str,
        tag: Option<&str>,
        from: &dyn Reflect,
        to: &mut dyn Reflect,
    ) -> Result<bool> {
        let Some(source_list) = from.as_list() else {
            return Ok(false);
        };

        match source_list.element_kind() {
            Kind::String => {
                let Some(tag) = tag else {
                    return Ok(false);
                };
                let Some(parser) = self.parsers.get(tag) else {
                    tracing::debug!("Tag parser '{}' for field '{}' is not registered", tag, name);
                    return Ok(false);
                };

                let values: Vec<String> = source_list
                    .iter()
                    .filter_map(|value| value.as_str().map(str::to_owned))
                    .collect();
                let parsed = parser.parse(&values);

                if !to.assign(&*parsed) {
                    return Err(FieldwiseError::TagParserOutput {
                        field: name.to_string(),
                        tag: tag.to_string(),
                        produced: parsed.type_name(),
                        expected: to.type_name(),
                    });
                }
                tracing::trace!("Parsed field '{}' with tag parser '{}'", name, tag);
                Ok(true)
            }
            Kind::Record => {
                let Some(dest_list) = to.as_list_mut() else {
                    return Ok(false);
                };
                let element_kind = dest_list.element_kind();
                if element_kind != Kind::Record {
                    return Err(FieldwiseError::SliceElementKindMismatch {
                        field: name.to_string(),
                        element_kind,
                    });
                }

                self.replace_records(name, source_list, dest_list)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Rebuild `dest` from `source` so repeated transforms do not accumulate.
    fn replace_records(&self, name: &str, source: &dyn List, dest: &mut dyn List) -> Result<()> {
        dest.clear();
        let failures = self.migrate_list(source, dest);

        match self.config.nested_migrate_errors {
            MigrateErrorPolicy::Propagate => match failures.into_iter().next() {
                Some(failure) => Err(failure.source),
                None => Ok(()),
            },
            MigrateErrorPolicy::Discard => {
                for failure in &failures {
                    tracing::warn!("Discarded migrate failure in field '{}': {}", name, failure);
                }
                Ok(())
            }
        }
    }
}

/// Transform `source` into `dest` using the process-wide tag parser registry
/// and the default configuration. See [`Transformer::transform`].
pub fn transform_struct(source: &dyn Record, dest: &mut dyn Record) -> Result<()> {
    let parsers = global_tag_parsers();
    Transformer::new(&parsers).transform(source, dest)
}

/// Field names to attempt, in declaration order. Embedded records contribute
/// their own direct fields instead of themselves.
fn param_names(source: &dyn Record) -> Vec<&'static str> {
    let mut names = Vec::new();

    for descriptor in source.descriptors() {
        if descriptor.embedded {
            if let Some(embedded) = source
                .own_field(descriptor.name)
                .and_then(|value| value.as_record())
            {
                names.extend(embedded.descriptors().iter().map(|inner| inner.name));
                continue;
            }
        }
        names.push(descriptor.name);
    }

    names
}

fn assign_field(name: &str, from: &dyn Reflect, to: &mut dyn Reflect) {
    if to.assign(from) {
        tracing::trace!("Copied field '{}'", name);
    } else {
        tracing::debug!(
            "Skipping field '{}': {} cannot be assigned to {}",
            name,
            from.type_name(),
            to.type_name()
        );
    }
}
