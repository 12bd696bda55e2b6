//! Section 3.2: Sequences - Views over a Shared Backing Store
//!
//! A [`Sequence`] is a small header (offset, length, capacity) pointing into a
//! backing store that other headers may share. This reproduces the behavior of
//! a growable slice:
//!
//! - Writing through one header is visible through every header whose window
//!   covers the same slot.
//! - Appending within capacity writes into the shared store in place.
//! - Appending beyond capacity moves the result to a fresh store, and from then
//!   on the old headers and the new one no longer see each other's writes.
//!
//! # Memory Layout
//!
//! ```text
//! seq  = [42 43 44 45 46]          view = seq.slice(1, 3)
//!
//!   seq header               view header
//! ┌──────────────┐         ┌──────────────┐
//! │ offset: 0    │         │ offset: 1    │
//! │ len: 5       │         │ len: 2       │
//! │ cap: 5       │         │ cap: 4       │
//! └──────┬───────┘         └──────┬───────┘
//!        │                        │
//!        ▼                        ▼
//!      ┌────┬────┬────┬────┬────┐
//!      │ 42 │ 43 │ 44 │ 45 │ 46 │   backing store (Rc<RefCell<Vec<T>>>)
//!      └────┴────┴────┴────┴────┘
//! ```
//!
//! # Growth Policy
//!
//! When an append needs more room than the capacity, the new capacity is the
//! largest of: twice the old capacity, the length actually needed, and
//! [`MIN_CAPACITY`]. See [`grow_capacity`]. Callers must not depend on the exact
//! factor, only on the fact that a reallocation detaches earlier views.
//!
//! # Thread Safety
//!
//! `Sequence<T>` is neither `Send` nor `Sync`. Sharing the store between
//! threads needs a different type with its own synchronization.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use basics_common::display::write_items;

use crate::error::{Result, SequenceError};

/// Smallest capacity allocated when an append grows an empty sequence.
pub const MIN_CAPACITY: usize = 1;

/// Computes the capacity of a freshly grown backing store.
///
/// # Example
///
/// ```
/// use basics_chapter3::section_3_2::grow_capacity;
///
/// assert_eq!(grow_capacity(10, 15), 20); // doubling is enough
/// assert_eq!(grow_capacity(2, 9), 9); // doubling is not enough
/// assert_eq!(grow_capacity(0, 0), 1); // never zero
/// ```
#[must_use]
pub fn grow_capacity(current: usize, needed: usize) -> usize {
    current
        .saturating_mul(2)
        .max(needed)
        .max(MIN_CAPACITY)
}

type Store<T> = Rc<RefCell<Vec<T>>>;

/// An ordered, indexable window over a shared backing store.
///
/// Cloning a `Sequence` copies the header only; the clone aliases the same
/// store, exactly like assigning one slice variable to another.
///
/// Invariants, for every header:
/// - `len <= cap`
/// - `offset + cap <= store.len()`
///
/// # Example
///
/// ```
/// use basics_chapter3::Sequence;
///
/// let seq = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
/// let view = seq.slice(1, 3).unwrap();
///
/// seq.set(1, 99).unwrap();
/// assert_eq!(view.get(0), Ok(99));
/// ```
pub struct Sequence<T> {
    store: Store<T>,
    offset: usize,
    len: usize,
    cap: usize,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with no backing storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(Vec::new())),
            offset: 0,
            len: 0,
            cap: 0,
        }
    }

    /// Wraps existing values; length and capacity both equal `values.len()`.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            store: Rc::new(RefCell::new(values)),
            offset: 0,
            len,
            cap: len,
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots reachable from this header's offset.
    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if both headers point into the same backing store.
    #[must_use]
    pub fn shares_storage(&self, other: &Sequence<T>) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Writes `value` at `index` in place.
    ///
    /// Never reallocates. The write is visible to every header whose window
    /// covers the same slot of the store.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(SequenceError::out_of_range(index, self.len));
        }
        self.store.borrow_mut()[self.offset + index] = value;
        Ok(())
    }

    /// Creates a view of `[start, end)` within the current length.
    ///
    /// The view shares the store. Its capacity runs from `start` to the end of
    /// this header's capacity, so a later in-place append through the view
    /// overwrites slots that this header may still read.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::Sequence;
    ///
    /// let xi = Sequence::from_vec(vec![42, 43, 44, 45, 46, 47, 48, 49, 50, 51]);
    /// assert_eq!(xi.slice(2, 6).unwrap().to_string(), "[44 45 46 47]");
    /// assert_eq!(xi.slice(2, 6).unwrap().cap(), 8);
    /// assert!(xi.slice(0, 11).is_err());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        self.window(start, end, self.len, self.cap)
    }

    /// Like [`slice`](Self::slice), but `end` may reach into spare capacity.
    ///
    /// Slots between the old length and `end` become visible with whatever
    /// value the store holds there.
    pub fn reslice(&self, start: usize, end: usize) -> Result<Self> {
        self.window(start, end, self.cap, self.cap)
    }

    /// Three-index view `[start, end)` whose capacity stops at `max`.
    ///
    /// Limiting the capacity to the length makes the next append reallocate
    /// instead of overwriting the parent's elements.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3, 4]);
    /// let head = seq.slice_full(0, 2, 2).unwrap();
    /// let grown = head.append([9]);
    ///
    /// assert_eq!(seq.get(2), Ok(3)); // parent untouched
    /// assert!(!grown.shares_storage(&seq));
    /// ```
    pub fn slice_full(&self, start: usize, end: usize, max: usize) -> Result<Self> {
        if max > self.cap {
            return Err(SequenceError::out_of_range(max, self.cap));
        }
        self.window(start, end, max, max)
    }

    fn window(&self, start: usize, end: usize, end_limit: usize, max: usize) -> Result<Self> {
        if end > end_limit {
            return Err(SequenceError::out_of_range(end, end_limit));
        }
        if start > end {
            return Err(SequenceError::out_of_range(start, end));
        }
        Ok(Self {
            store: Rc::clone(&self.store),
            offset: self.offset + start,
            len: end - start,
            cap: max - start,
        })
    }
}

impl<T: Clone> Sequence<T> {
    /// Reads the element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(SequenceError::out_of_range(index, self.len));
        }
        Ok(self.store.borrow()[self.offset + index].clone())
    }

    /// Copies the live elements out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.store.borrow()[self.offset..self.offset + self.len].to_vec()
    }

    /// Iterates over a snapshot of the live elements.
    ///
    /// The snapshot is taken up front, so writes made while iterating are not
    /// observed and the store is never borrowed across the loop body.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }

    /// Copies `min(self.len(), src.len())` elements from `src` into this
    /// sequence's existing slots and returns the count.
    ///
    /// This is a value copy: afterwards the two sequences are independent
    /// unless they already shared a store. Overlapping windows of one store
    /// are handled as if the source were read completely before writing.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::Sequence;
    ///
    /// let a = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
    /// let b = Sequence::<i32>::make(6, 6).unwrap();
    /// assert_eq!(b.copy_from(&a), 5);
    ///
    /// a.set(0, 7).unwrap();
    /// assert_eq!(b.get(0), Ok(1));
    /// assert_eq!(b.to_string(), "[1 2 3 4 5 0]");
    /// ```
    pub fn copy_from(&self, src: &Sequence<T>) -> usize {
        let count = self.len.min(src.len);
        let values = src.store.borrow()[src.offset..src.offset + count].to_vec();
        let mut store = self.store.borrow_mut();
        store[self.offset..self.offset + count].clone_from_slice(&values);
        count
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Allocates a store of `cap` default-valued slots and exposes the first
    /// `len` of them.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::{Sequence, SequenceError};
    ///
    /// let sf = Sequence::<i32>::make(0, 10).unwrap();
    /// assert_eq!((sf.len(), sf.cap()), (0, 10));
    ///
    /// assert!(matches!(
    ///     Sequence::<i32>::make(3, 2),
    ///     Err(SequenceError::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn make(len: usize, cap: usize) -> Result<Self> {
        if len > cap {
            return Err(SequenceError::invalid(format!(
                "length {len} exceeds capacity {cap}"
            )));
        }
        Ok(Self {
            store: Rc::new(RefCell::new(vec![T::default(); cap])),
            offset: 0,
            len,
            cap,
        })
    }

    /// [`make`](Self::make) for sizes arriving as signed integers.
    ///
    /// Negative sizes are rejected with `InvalidArgument`.
    pub fn make_signed(len: i64, cap: i64) -> Result<Self> {
        let len = usize::try_from(len)
            .map_err(|_| SequenceError::invalid(format!("negative length {len}")))?;
        let cap = usize::try_from(cap)
            .map_err(|_| SequenceError::invalid(format!("negative capacity {cap}")))?;
        Self::make(len, cap)
    }

    /// Appends `values` and returns the resulting header.
    ///
    /// If the values fit within the capacity they are written into the shared
    /// store starting at `len`, and the result aliases `self`. Otherwise the
    /// live elements and the new values are copied into a fresh store sized by
    /// [`grow_capacity`]; every header taken before this call keeps pointing at
    /// the old store and no longer observes writes made through the result.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::Sequence;
    ///
    /// let sf = Sequence::<i32>::make(0, 10).unwrap();
    /// let sf = sf.append(1..=10);
    /// assert_eq!((sf.len(), sf.cap()), (10, 10));
    ///
    /// let grown = sf.append(11..=15);
    /// assert_eq!((grown.len(), grown.cap()), (15, 20));
    /// assert!(!grown.shares_storage(&sf));
    /// ```
    #[must_use]
    pub fn append<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return self.clone();
        }

        let needed = self.len + values.len();
        if needed <= self.cap {
            let start = self.offset + self.len;
            let mut store = self.store.borrow_mut();
            for (slot, value) in store[start..start + values.len()].iter_mut().zip(values) {
                *slot = value;
            }
            return Self {
                store: Rc::clone(&self.store),
                offset: self.offset,
                len: needed,
                cap: self.cap,
            };
        }

        let new_cap = grow_capacity(self.cap, needed);
        tracing::trace!(
            old_cap = self.cap,
            new_cap,
            len = needed,
            "append reallocated backing store"
        );

        let mut fresh = Vec::with_capacity(new_cap);
        fresh.extend_from_slice(&self.store.borrow()[self.offset..self.offset + self.len]);
        fresh.extend(values);
        fresh.resize(new_cap, T::default());

        Self {
            store: Rc::new(RefCell::new(fresh)),
            offset: 0,
            len: needed,
            cap: new_cap,
        }
    }

    /// Removes the element at `index` by appending the tail onto the head.
    ///
    /// Since the result fits within the original capacity, the removal happens
    /// inside the shared store: the elements after `index` shift left and the
    /// original header's last slot keeps its old value.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_chapter3::Sequence;
    ///
    /// let xi = Sequence::from_vec(vec![42, 43, 44, 45, 46, 47, 48, 49, 50, 51]);
    /// let xf = xi.remove_at(3).unwrap();
    ///
    /// assert_eq!(xf.to_string(), "[42 43 44 46 47 48 49 50 51]");
    /// assert_eq!(xi.to_string(), "[42 43 44 46 47 48 49 50 51 51]");
    /// ```
    pub fn remove_at(&self, index: usize) -> Result<Self> {
        if index >= self.len {
            return Err(SequenceError::out_of_range(index, self.len));
        }
        let tail = self.slice(index + 1, self.len)?.to_vec();
        Ok(self.slice(0, index)?.append(tail))
    }
}

/// Copies elements from `src` into `dst`; see [`Sequence::copy_from`].
pub fn copy<T: Clone>(dst: &Sequence<T>, src: &Sequence<T>) -> usize {
    dst.copy_from(src)
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    /// Element-wise equality of the live windows; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.to_vec() == other.to_vec()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        f.write_str("[")?;
        write_items(f, &store[self.offset..self.offset + self.len])?;
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        f.debug_struct("Sequence")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("elements", &&store[self.offset..self.offset + self.len])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[i32]) -> Sequence<i32> {
        Sequence::from_vec(values.to_vec())
    }

    fn assert_bounds<T>(s: &Sequence<T>) {
        assert!(s.len() <= s.cap(), "len {} > cap {}", s.len(), s.cap());
    }

    #[test]
    fn test_make_zero_fills() {
        let s = Sequence::<i32>::make(3, 5).unwrap();
        assert_eq!(s.to_vec(), vec![0, 0, 0]);
        assert_eq!(s.cap(), 5);

        let names = Sequence::<String>::make(2, 2).unwrap();
        assert_eq!(names.to_vec(), vec![String::new(), String::new()]);
    }

    #[test]
    fn test_make_rejects_bad_sizes() {
        assert!(matches!(
            Sequence::<i32>::make(4, 3),
            Err(SequenceError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Sequence::<i32>::make_signed(-1, 3),
            Err(SequenceError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Sequence::<i32>::make_signed(0, -3),
            Err(SequenceError::InvalidArgument { .. })
        ));
        assert!(Sequence::<i32>::make_signed(2, 3).is_ok());
    }

    #[test]
    fn test_view_aliasing() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let v = s.slice(1, 3).unwrap();
        s.set(1, 99).unwrap();
        assert_eq!(v.get(0), Ok(99));

        v.set(1, 77).unwrap();
        assert_eq!(s.get(2), Ok(77));
        assert!(v.shares_storage(&s));
    }

    #[test]
    fn test_view_capacity_runs_to_parent_end() {
        let s = Sequence::<i32>::make(4, 10).unwrap();
        let v = s.slice(1, 3).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.cap(), 9);
        assert_bounds(&v);
    }

    #[test]
    fn test_append_within_capacity_writes_in_place() {
        let base = Sequence::<i32>::make(2, 4).unwrap();
        let wide = base.reslice(0, 4).unwrap();
        let grown = base.append([5, 6]);

        assert!(grown.shares_storage(&base));
        assert_eq!(grown.to_vec(), vec![0, 0, 5, 6]);
        // a window that already covered those slots sees the appended values
        assert_eq!(wide.to_vec(), vec![0, 0, 5, 6]);
        // the original header's length is unchanged
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_append_on_view_overwrites_parent() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let head = s.slice(0, 2).unwrap();
        let _ = head.append([9]);
        assert_eq!(s.to_vec(), vec![1, 2, 9, 4, 5]);
    }

    #[test]
    fn test_growth_detaches_earlier_views() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(s.len(), s.cap());
        let before = s.slice(0, 3).unwrap();

        let grown = s.append([4]);
        assert!(!grown.shares_storage(&s));
        assert_eq!(grown.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(before.len(), 3);

        before.set(0, 100).unwrap();
        assert_eq!(grown.get(0), Ok(1));

        grown.set(1, 200).unwrap();
        assert_eq!(before.get(1), Ok(2));
        assert_eq!(s.get(1), Ok(2));
    }

    #[test]
    fn test_growth_policy_sizes() {
        let s = Sequence::<i32>::new();
        let one = s.append([1]);
        assert_eq!(one.cap(), 1);

        let sf = Sequence::<i32>::make(0, 10).unwrap().append(1..=10);
        assert_eq!(sf.cap(), 10);
        let sf = sf.append(11..=15);
        assert_eq!((sf.len(), sf.cap()), (15, 20));

        let big = seq(&[1, 2]).append(0..10);
        assert_eq!((big.len(), big.cap()), (12, 12));
        assert_bounds(&big);
    }

    #[test]
    fn test_append_nothing_keeps_header() {
        let s = seq(&[1, 2]);
        let same = s.append(std::iter::empty());
        assert!(same.shares_storage(&s));
        assert_eq!(same, s);
    }

    #[test]
    fn test_copy_is_deep() {
        let a = seq(&[1, 2, 3, 4, 5]);
        let b = Sequence::<i32>::make(6, 6).unwrap();
        assert_eq!(copy(&b, &a), 5);
        a.set(0, 7).unwrap();
        assert_eq!(b.get(0), Ok(1));
        assert!(!b.shares_storage(&a));
    }

    #[test]
    fn test_copy_limited_by_shorter_side() {
        let a = seq(&[1, 2, 3]);
        let b = Sequence::<i32>::make(2, 8).unwrap();
        assert_eq!(b.copy_from(&a), 2);
        assert_eq!(b.to_vec(), vec![1, 2]);
        assert_eq!(b.cap(), 8);
    }

    #[test]
    fn test_copy_between_overlapping_views() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let dst = s.slice(1, 5).unwrap();
        let src = s.slice(0, 4).unwrap();
        assert_eq!(dst.copy_from(&src), 4);
        assert_eq!(s.to_vec(), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_at() {
        let xi = seq(&[42, 43, 44, 45, 46, 47, 48, 49, 50, 51]);
        let xf = xi.remove_at(3).unwrap();
        assert_eq!(xf.to_vec(), vec![42, 43, 44, 46, 47, 48, 49, 50, 51]);
        assert!(xf.shares_storage(&xi));

        let short = seq(&[42, 43, 44, 45, 46]);
        assert_eq!(short.remove_at(4).unwrap().to_vec(), vec![42, 43, 44, 45]);
        assert_eq!(short.remove_at(0).unwrap().len(), 4);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_sequence() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(
            s.remove_at(3),
            Err(SequenceError::IndexOutOfRange { index: 3, limit: 3 })
        );
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_view_round_trip() {
        let s = seq(&[5, 6, 7]);
        let whole = s.slice(0, s.len()).unwrap();
        for i in 0..s.len() {
            assert_eq!(whole.get(i), s.get(i));
        }
        for k in 0..=s.len() {
            assert_eq!(s.slice(k, k).unwrap().len(), 0);
        }
    }

    #[test]
    fn test_out_of_range_fails() {
        let s = Sequence::<i32>::make(3, 6).unwrap();
        assert_eq!(
            s.get(s.len()),
            Err(SequenceError::IndexOutOfRange { index: 3, limit: 3 })
        );
        assert!(matches!(
            s.slice(0, s.len() + 1),
            Err(SequenceError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            s.set(3, 1),
            Err(SequenceError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            s.slice(2, 1),
            Err(SequenceError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reslice_reaches_capacity() {
        let s = Sequence::<i32>::make(2, 5).unwrap();
        let v = s.reslice(0, 5).unwrap();
        assert_eq!(v.len(), 5);
        assert!(s.reslice(0, 6).is_err());
    }

    #[test]
    fn test_slice_full_bounds() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let v = s.slice_full(1, 2, 3).unwrap();
        assert_eq!((v.len(), v.cap()), (1, 2));
        assert!(s.slice_full(1, 4, 3).is_err());
        assert!(s.slice_full(0, 1, 6).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(s.to_string(), "[1 2 3]");
        assert_eq!(
            format!("{:?}", s.slice(1, 2).unwrap()),
            "Sequence { len: 1, cap: 2, elements: [2] }"
        );
    }

    #[test]
    fn test_collect_and_iter() {
        let s: Sequence<i32> = (1..=4).collect();
        assert_eq!(s.cap(), 4);
        let doubled: Vec<i32> = s.iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6, 8]);
    }
}
