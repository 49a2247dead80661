//! Small key-value scratch structure used to back recorder payloads.

use std::fmt;

/// An ordered list of `(key, value)` pairs, rendered to `String` eagerly.
///
/// Carried over from the teacher's `KV` almost verbatim: recorders are
/// side-effect-only and see a snapshot, never a reference they could retain
/// past the call, so eager stringification is simpler than threading a
/// lifetime through the recorder trait.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KV {
    kv: Vec<(&'static str, String)>,
}

impl KV {
    /// Creates an empty `KV`.
    pub fn new() -> Self {
        KV { kv: vec![] }
    }

    /// Appends one key-value pair, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.kv.push((key, value.to_string()));
        self
    }

    /// Merges another `KV`'s entries into this one, newest last.
    pub fn merge(mut self, other: KV) -> Self {
        self.kv.extend(other.kv);
        self
    }

    /// Iterates the stored pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.kv.iter()
    }
}

impl fmt::Display for KV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.kv.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        Ok(())
    }
}

impl FromIterator<(&'static str, String)> for KV {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        KV {
            kv: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_and_display() {
        let kv = KV::new().with("iter", 3).with("cost", 1.5);
        assert_eq!(format!("{kv}"), "iter: 3, cost: 1.5");
    }

    #[test]
    fn merge_preserves_order() {
        let a = KV::new().with("a", 1);
        let b = KV::new().with("b", 2);
        let merged = a.merge(b);
        assert_eq!(format!("{merged}"), "a: 1, b: 2");
    }

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn kv_is_send_and_sync() {
        assert_send::<KV>();
        assert_sync::<KV>();
    }
}
