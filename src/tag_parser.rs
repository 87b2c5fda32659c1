//! Tag parser registry.
//!
//! A tag parser converts a list of strings into a replacement value during
//! transformation. A record field opts in with `field: tag = "name"` in its
//! [`reflect_record!`](crate::reflect_record) declaration; when that field is a
//! list of strings and a parser is registered under `name`, the parser's output
//! is stored in the destination field instead of the raw list.
//!
//! Parsers live either in an explicit [`TagParsers`] value handed to a
//! [`Transformer`](crate::Transformer), or in the process-wide registry used by
//! the free functions. Populate the process-wide registry during start-up,
//! before any transformation runs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::{FieldwiseError, Result};
use crate::value::Reflect;

/// Conversion from a list of strings to an arbitrary reflected value
pub trait TagParser: Send + Sync {
    fn parse(&self, values: &[String]) -> Box<dyn Reflect>;
}

impl<F> TagParser for F
where
    F: Fn(&[String]) -> Box<dyn Reflect> + Send + Sync,
{
    fn parse(&self, values: &[String]) -> Box<dyn Reflect> {
        self(values)
    }
}

/// Registry of tag parsers keyed by tag name. Keys are unique.
#[derive(Default)]
pub struct TagParsers {
    parsers: HashMap<String, Box<dyn TagParser>>,
}

impl TagParsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser returning any reflected type
    ///
    /// # Example
    ///
    /// ```ignore
    /// use fieldwise::TagParsers;
    ///
    /// let mut parsers = TagParsers::new();
    /// parsers.register("join", |values: &[String]| values.join(","))?;
    /// ```
    ///
    /// # Errors
    /// Returns `DuplicateTagParser` if `name` is already registered
    pub fn register<F, R>(&mut self, name: impl Into<String>, parser: F) -> Result<()>
    where
        F: Fn(&[String]) -> R + Send + Sync + 'static,
        R: Reflect,
    {
        self.insert(
            name,
            Box::new(move |values: &[String]| Box::new(parser(values)) as Box<dyn Reflect>),
        )
    }

    /// Register an already boxed parser
    pub fn insert(&mut self, name: impl Into<String>, parser: Box<dyn TagParser>) -> Result<()> {
        let name = name.into();
        if self.parsers.contains_key(&name) {
            return Err(FieldwiseError::DuplicateTagParser(name));
        }

        tracing::debug!("Registered tag parser '{}'", name);
        self.parsers.insert(name, parser);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn TagParser> {
        self.parsers.get(name).map(|parser| parser.as_ref())
    }

    pub fn has_parser(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// Names of all registered parsers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

static GLOBAL_TAG_PARSERS: Lazy<RwLock<TagParsers>> = Lazy::new(|| RwLock::new(TagParsers::new()));

/// Register a parser in the process-wide registry.
///
/// # Panics
/// Panics if a parser is already registered under `name`. Duplicate keys are a
/// configuration bug and should stop start-up.
pub fn register_tag_parser<F, R>(name: &str, parser: F)
where
    F: Fn(&[String]) -> R + Send + Sync + 'static,
    R: Reflect,
{
    if let Err(err) = GLOBAL_TAG_PARSERS.write().register(name, parser) {
        panic!("{}", err);
    }
}

/// Read access to the process-wide registry.
///
/// The guard blocks registration while held; parsers invoked under it must not
/// register parsers themselves. The lock is taken recursively, so a parser may
/// call [`transform_struct`](crate::transform_struct) or
/// [`migrate_slice`](crate::migrate_slice) even while a writer is waiting.
pub fn global_tag_parsers() -> RwLockReadGuard<'static, TagParsers> {
    GLOBAL_TAG_PARSERS.read_recursive()
}
