use serde::Serialize;
use std::fmt;

macro_rules! new_id_type {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
            #[serde(transparent)]
            $vis struct $name(u64);

            impl $name {
                #[inline]
                pub const fn from_raw(raw: u64) -> Self {
                    Self(raw)
                }

                #[inline]
                pub const fn raw(self) -> u64 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "#{}", self.0)
                }
            }
        )*
    };
}

new_id_type! {
    /// Session-unique atom identifier; assigned in increasing order and never reused.
    pub struct AtomId;
    /// Session-unique bond identifier; assigned in increasing order and never reused.
    pub struct BondId;
}

/// Monotonic id source. Survives workspace clears so ids stay unique for the session.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub(crate) fn next_raw(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_yields_strictly_increasing_values() {
        let mut alloc = IdAllocator::default();
        let a = alloc.next_raw();
        let b = alloc.next_raw();
        let c = alloc.next_raw();
        assert!(a < b && b < c);
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(AtomId::from_raw(1) < AtomId::from_raw(2));
        assert_eq!(BondId::from_raw(7).raw(), 7);
    }

    #[test]
    fn display_prefixes_hash() {
        assert_eq!(AtomId::from_raw(42).to_string(), "#42");
    }
}
