//! A contiguous, growable array that manages its own buffer.
//!
//! Appending to a full array allocates a fresh buffer half again as large, moves the existing
//! elements across in order and releases the old buffer. Every indexed access is bounds checked:
//! [`DynamicArray::get`] reports a bad index as an error and `array[i]` panics with the same
//! message.
//!
//! # Examples
//!
//! ```
//! use containers::array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! assert_eq!(array.capacity(), 2);
//!
//! array.push(10)?;
//! array.push(20)?;
//! array.push(30)?;
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.as_slice(), [10, 20, 30]);
//! assert_eq!(array.capacity(), 3);
//!
//! array[1] = 25;
//! assert_eq!(array.get(1), Ok(&25));
//! assert!(array.get(3).is_err());
//! # Ok::<(), containers::ContainerError>(())
//! ```

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::{check_bounds, ContainerError, Result};

/// How many slots [`DynamicArray::new`] allocates up front.
pub const DEFAULT_CAPACITY: usize = 2;

/// The capacity to move to once an array of `capacity` slots is full. Grows by half, but always by
/// at least one slot so empty and single-slot arrays make progress.
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .saturating_add(capacity / 2)
        .max(capacity.saturating_add(1))
}

/// A generic array backed by a single owned buffer.
///
/// Slots `[0, len)` always hold initialised values. Slots `[len, capacity)` are allocated but
/// logically empty.
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    marker: PhantomData<T>,
}

// SAFETY: The array uniquely owns its buffer so it is exactly as thread safe as `T`.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: Shared access only ever hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T> DynamicArray<T> {
    /// Create an empty array with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Panics
    ///
    /// If the initial buffer cannot be allocated. Use [`DynamicArray::with_capacity`] to handle
    /// that case instead.
    pub fn new() -> Self {
        match Self::with_capacity(DEFAULT_CAPACITY) {
            Ok(array) => array,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            ptr: Self::allocate(capacity)?,
            len: 0,
            cap: capacity,
            marker: PhantomData,
        })
    }

    /// The number of populated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slots are populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The populated slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned (dangling only when nothing was allocated, in
        // which case `len` is 0) and the first `len` slots are initialised.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The populated slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: See `as_slice`. `&mut self` guarantees the slice is unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Appends `value` after the last populated slot, growing the buffer first if it is full.
    ///
    /// If growing fails the array is left untouched and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len >= self.cap {
            self.grow()?;
        }

        // SAFETY: `len < cap` so this slot is allocated and not yet initialised.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last value, or `None` if the array is empty. The capacity is left
    /// alone.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old `len - 1` was initialised and, now that `len` has been
        // decremented, will never be read again without being rewritten first.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// The last populated value, if any.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// A reference to the value at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::array::DynamicArray;
    /// use containers::ContainerError;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push('a')?;
    ///
    /// assert_eq!(array.get(0), Ok(&'a'));
    /// assert_eq!(array.get(1), Err(ContainerError::OutOfRange { index: 1, len: 1 }));
    /// # Ok::<(), ContainerError>(())
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        Ok(&self.as_slice()[index])
    }

    /// A mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Drops every value and releases the buffer. Both the length and capacity are 0 afterwards;
    /// the next `push` allocates again.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::debug!("clearing array of {} values", self.len);
        }
        self.release_all();
    }

    /// Copies the array into a new buffer with the same capacity.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.cap)?;
        for value in self.as_slice() {
            // Never grows: `copy` has at least as many slots as `self` has values.
            copy.push(value.clone())?;
        }
        Ok(copy)
    }

    /// Moves every value into a buffer half again as large and releases the old one.
    fn grow(&mut self) -> Result<()> {
        let new_cap = grown_capacity(self.cap);
        if new_cap == self.cap {
            return Err(ContainerError::allocation_failure(new_cap));
        }
        let new_ptr = Self::allocate(new_cap)?;

        // SAFETY: Both buffers have room for at least `len` values and are distinct allocations.
        // The values are moved, not copied: the old buffer is released without dropping them.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            Self::deallocate(self.ptr, self.cap);
        }

        log::trace!("grew array from {} to {} slots", self.cap, new_cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Drops the populated values and frees the buffer, leaving an empty array with no capacity.
    fn release_all(&mut self) {
        let values = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // Zero the length first so a panicking destructor can't lead to a double drop.
        self.len = 0;
        // SAFETY: The first `len` slots were initialised and are no longer reachable through
        // `self`. The buffer was allocated by `allocate` with exactly `cap` slots.
        unsafe {
            ptr::drop_in_place(values);
            Self::deallocate(self.ptr, self.cap);
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Allocates an uninitialised buffer for `capacity` values. Zero-sized requests (including
    /// any request for a zero-sized `T`) get a dangling pointer and no allocation.
    fn allocate(capacity: usize) -> Result<NonNull<T>> {
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| ContainerError::allocation_failure(capacity))?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) } as *mut T;
        NonNull::new(ptr).ok_or_else(|| ContainerError::allocation_failure(capacity))
    }

    /// # Safety
    ///
    /// `ptr` must have come from `allocate(capacity)` and must not be used afterwards.
    unsafe fn deallocate(ptr: NonNull<T>, capacity: usize) {
        if let Ok(layout) = Layout::array::<T>(capacity) {
            if layout.size() != 0 {
                alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T> Clone for DynamicArray<T>
where
    T: Clone,
{
    /// # Panics
    ///
    /// If the new buffer cannot be allocated.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{}", err),
        }
    }

    /// Releases the storage `self` owns before copying `source`.
    fn clone_from(&mut self, source: &Self) {
        self.release_all();
        *self = source.clone();
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> fmt::Debug for DynamicArray<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}
