//! Records: structs whose fields are addressable by name.
//!
//! A record is declared once with [`reflect_record!`](crate::reflect_record),
//! which supplies the static [`FieldDescriptor`] list and the accessors for the
//! record's own fields. Lookup through embedded records (promoted fields) is
//! provided here on top of those accessors.

use crate::value::Reflect;

/// Static description of one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as written in the struct
    pub name: &'static str,

    /// Key of the tag parser applied when this field is a list of strings
    pub tag: Option<&'static str>,

    /// Embedded record whose fields are promoted onto the containing record
    pub embedded: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            embedded: false,
        }
    }

    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}

/// A structured value composed of named fields.
///
/// Implementors provide the record's own fields; [`Record::field`],
/// [`Record::field_mut`] and [`Record::descriptor`] also resolve fields
/// promoted from embedded records, at any depth, own fields first.
pub trait Record: Reflect {
    /// Name of the record type
    fn record_name(&self) -> &'static str;

    /// Declared fields, in declaration order
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// A field declared directly on this record
    fn own_field(&self, name: &str) -> Option<&dyn Reflect>;

    fn own_field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Find a field by name, including fields promoted from embedded records.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        if let Some(value) = self.own_field(name) {
            return Some(value);
        }

        self.descriptors()
            .iter()
            .filter(|descriptor| descriptor.embedded)
            .find_map(|descriptor| self.own_field(descriptor.name)?.as_record()?.field(name))
    }

    /// Mutable counterpart of [`Record::field`].
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        if self.own_field(name).is_some() {
            return self.own_field_mut(name);
        }

        let host = self.embedded_host(name)?;
        self.own_field_mut(host)?.as_record_mut()?.field_mut(name)
    }

    /// Descriptor of a field by name, including promoted fields.
    fn descriptor(&self, name: &str) -> Option<&'static FieldDescriptor> {
        if let Some(descriptor) = self.descriptors().iter().find(|d| d.name == name) {
            return Some(descriptor);
        }

        let host = self.embedded_host(name)?;
        self.own_field(host)?.as_record()?.descriptor(name)
    }

    /// Name of the embedded field through which `name` is promoted.
    fn embedded_host(&self, name: &str) -> Option<&'static str> {
        self.descriptors()
            .iter()
            .filter(|descriptor| descriptor.embedded)
            .find(|descriptor| {
                self.own_field(descriptor.name)
                    .and_then(|value| value.as_record())
                    .is_some_and(|record| record.field(name).is_some())
            })
            .map(|descriptor| descriptor.name)
    }
}
