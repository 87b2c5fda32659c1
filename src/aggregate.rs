//! Summing a named field across a list of records.

use crate::value::{Kind, Reflect};

/// Add the value of field `name` of every element of `source` to `sum`.
///
/// `int` and `int32` fields are added as 32-bit values; string fields are parsed
/// as base-10 integers and skipped when they do not parse. Fields of any other
/// kind, elements without the field and non-record elements are skipped. The
/// accumulator is not reset. Nothing happens if `source` is not a list.
pub fn sum_slice_params_value(source: &dyn Reflect, name: &str, sum: &mut i32) {
    let Some(list) = source.as_list() else {
        tracing::debug!("Skipping sum of '{}': {} is not a list", name, source.type_name());
        return;
    };

    for value in list
        .iter()
        .filter_map(|element| element.as_record()?.field(name))
    {
        match value.kind() {
            Kind::Int | Kind::Int32 => {
                if let Some(number) = value.as_int() {
                    *sum = sum.wrapping_add(number as i32);
                }
            }
            Kind::String => {
                let text = value.as_str().unwrap_or_default();
                match text.parse::<i64>() {
                    Ok(number) => *sum = sum.wrapping_add(number as i32),
                    Err(err) => {
                        tracing::debug!("Skipping '{}' value {:?}: {}", name, text, err);
                    }
                }
            }
            _ => {}
        }
    }
}
