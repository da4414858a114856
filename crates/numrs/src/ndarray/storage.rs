//! Owned-or-borrowed element buffer backing an `NdArray`.
use std::ptr::NonNull;

/// Contiguous row-major element storage.
///
/// `Owned` buffers are freed exactly once when dropped. `Borrowed` buffers
/// point at caller-managed memory that is never freed here; whoever built the
/// view guarantees the memory outlives it.
pub(crate) enum Buffer<T> {
    Owned(Vec<T>),
    Borrowed { ptr: NonNull<T>, len: usize },
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Buffer::Owned(Vec::new())
    }
}

impl<T> Buffer<T> {
    /// Wraps foreign memory.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of `len` elements for as long
    /// as the buffer is alive, and nothing else may access that memory
    /// while the buffer is borrowed mutably. When `take_ownership` is set the
    /// memory must additionally come from a `Vec<T>` (or boxed slice) with
    /// capacity `len`, since it will be released through `Vec`.
    pub(crate) unsafe fn from_raw(ptr: *mut T, len: usize, take_ownership: bool) -> Self {
        match NonNull::new(ptr) {
            None => Buffer::Owned(Vec::new()),
            Some(ptr) if take_ownership => {
                Buffer::Owned(Vec::from_raw_parts(ptr.as_ptr(), len, len))
            }
            Some(ptr) => Buffer::Borrowed { ptr, len },
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Buffer::Owned(data) => data,
            // SAFETY: upheld by the contract of `from_raw`.
            Buffer::Borrowed { ptr, len } => unsafe {
                std::slice::from_raw_parts(ptr.as_ptr(), *len)
            },
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Buffer::Owned(data) => data,
            // SAFETY: upheld by the contract of `from_raw`.
            Buffer::Borrowed { ptr, len } => unsafe {
                std::slice::from_raw_parts_mut(ptr.as_ptr(), *len)
            },
        }
    }

    /// Hands the allocation to the caller. Owned memory is leaked as a boxed
    /// slice (capacity == length) so it can be re-adopted with
    /// `from_raw(.., true)`; borrowed memory was never ours and is returned
    /// as-is.
    pub(crate) fn into_raw(self) -> (*mut T, usize) {
        match self {
            Buffer::Owned(data) => {
                if data.is_empty() {
                    return (std::ptr::null_mut(), 0);
                }
                let len = data.len();
                let boxed = data.into_boxed_slice();
                (Box::into_raw(boxed) as *mut T, len)
            }
            Buffer::Borrowed { ptr, len } => (ptr.as_ptr(), len),
        }
    }
}

impl<T: Clone> Buffer<T> {
    /// Deep copy into a freshly owned allocation.
    pub(crate) fn to_owned_buffer(&self) -> Buffer<T> {
        Buffer::Owned(self.as_slice().to_vec())
    }
}
