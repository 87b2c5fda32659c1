//! In-place filtering of a list of records by a field value.

use crate::value::Reflect;

/// Which elements [`filter_slice_with`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Remove elements whose field equals the wanted value
    #[default]
    RemoveMatches,
    /// Keep only elements whose field equals the wanted value
    RetainMatches,
}

impl FilterMode {
    fn keeps(self, matched: bool) -> bool {
        match self {
            FilterMode::RemoveMatches => !matched,
            FilterMode::RetainMatches => matched,
        }
    }
}

/// `true` removes matches, `false` keeps only matches.
impl From<bool> for FilterMode {
    fn from(remove_matches: bool) -> Self {
        if remove_matches {
            FilterMode::RemoveMatches
        } else {
            FilterMode::RetainMatches
        }
    }
}

/// Remove every element of `source` whose field `name` deep-equals `want`.
pub fn filter_slice(source: &mut dyn Reflect, name: &str, want: &dyn Reflect) {
    filter_slice_with(source, name, want, FilterMode::default())
}

/// Filter `source` in place, preserving the order of the remaining elements.
///
/// An element matches when it is a record with a field `name` of the same
/// concrete type as `want` and deep-equal to it. Nothing happens if `source`
/// is not a list.
pub fn filter_slice_with(source: &mut dyn Reflect, name: &str, want: &dyn Reflect, mode: FilterMode) {
    let Some(list) = source.as_list_mut() else {
        tracing::debug!("Skipping filter on '{}': argument is not a list", name);
        return;
    };

    let keep: Vec<bool> = list
        .iter()
        .map(|element| {
            let matched = element
                .as_record()
                .and_then(|record| record.field(name))
                .is_some_and(|value| value.reflect_eq(want));
            mode.keeps(matched)
        })
        .collect();

    list.retain_mask(&keep);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_record;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Row {
        a: String,
        b: i32,
        c: String,
    }

    reflect_record!(Row { a, b, c });

    fn row(a: &str, b: i32) -> Row {
        Row {
            a: a.to_string(),
            b,
            c: a.to_string(),
        }
    }

    fn rows() -> Vec<Row> {
        vec![row("1", 1), row("2", 2), row("3", 2)]
    }

    #[test]
    fn test_default_removes_matches() {
        let mut rows = rows();

        filter_slice(&mut rows, "b", &2i32);

        assert_eq!(rows, vec![row("1", 1)]);
    }

    #[test]
    fn test_retain_matches() {
        let mut rows = rows();

        filter_slice_with(&mut rows, "b", &2i32, FilterMode::from(false));

        assert_eq!(rows, vec![row("2", 2), row("3", 2)]);
    }

    #[test]
    fn test_want_must_have_the_field_type() {
        let mut rows = rows();

        filter_slice(&mut rows, "b", &2i64);

        assert_eq!(rows, self::rows());
    }

    #[test]
    fn test_missing_field_never_matches() {
        let mut removed = rows();
        let mut retained = rows();

        filter_slice(&mut removed, "missing", &2i32);
        filter_slice_with(&mut retained, "missing", &2i32, FilterMode::RetainMatches);

        assert_eq!(removed.len(), 3);
        assert!(retained.is_empty());
    }

    #[test]
    fn test_string_field() {
        let mut rows = rows();

        filter_slice(&mut rows, "c", &"3".to_string());

        assert_eq!(rows, vec![row("1", 1), row("2", 2)]);
    }

    #[test]
    fn test_non_list_is_noop() {
        let mut single = row("1", 1);

        filter_slice(&mut single, "b", &1i32);

        assert_eq!(single, row("1", 1));
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(FilterMode::from(true), FilterMode::RemoveMatches);
        assert_eq!(FilterMode::from(false), FilterMode::RetainMatches);
    }
}
