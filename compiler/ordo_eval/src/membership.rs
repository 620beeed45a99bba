//! Membership tests (`in` / `not in`).

use ordo_value::{
    byte_out_of_range, invalid_membership, not_iterable, CompareResult, Value,
};

use crate::collections::check_hashable;
use crate::compare::Comparator;
use crate::stack::ensure_sufficient_stack;

impl Comparator {
    /// Whether `candidate` is in `container`.
    ///
    /// Strings and byte strings test for contiguous runs; other containers
    /// test element equality, maps test keys.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(candidate = candidate.type_name(), container = container.type_name())
    )]
    pub fn contains(&self, candidate: &Value, container: &Value) -> CompareResult {
        self.contains_at(candidate, container, 0)
    }

    pub(crate) fn contains_at(
        &self,
        candidate: &Value,
        container: &Value,
        depth: usize,
    ) -> CompareResult {
        match container {
            Value::Str(haystack) => match candidate {
                Value::Str(needle) => Ok(haystack.contains(needle.as_str())),
                other => Err(invalid_membership("str", "str", other.type_name())),
            },
            Value::Bytes(haystack) => match candidate {
                Value::Bytes(needle) => Ok(contains_run(haystack, needle)),
                other => {
                    let Some(n) = other.as_integral() else {
                        return Err(invalid_membership(
                            "bytes",
                            "a bytes-like object or int",
                            other.type_name(),
                        ));
                    };
                    let byte = u8::try_from(n).map_err(|_| byte_out_of_range(n))?;
                    Ok(haystack.contains(&byte))
                }
            },
            Value::List(items) | Value::Tuple(items) => {
                self.any_element(items.iter(), candidate, depth)
            }
            Value::Set(items) | Value::FrozenSet(items) => {
                check_hashable(candidate)?;
                self.any_element(items.iter(), candidate, depth)
            }
            Value::Map(entries) => {
                check_hashable(candidate)?;
                self.any_element(entries.keys(), candidate, depth)
            }
            other => Err(not_iterable(other.type_name())),
        }
    }

    fn any_element<'v>(
        &self,
        items: impl IntoIterator<Item = &'v Value>,
        candidate: &Value,
        depth: usize,
    ) -> CompareResult {
        let depth = self.descend(depth)?;
        ensure_sufficient_stack(|| Ok(self.position(items, candidate, depth)?.is_some()))
    }
}

/// Whether `needle` occurs as a contiguous run in `haystack`.
fn contains_run(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
