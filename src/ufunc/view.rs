// Strided element views
// Borrowed, non-owning views over u8 buffers with a fixed signed element stride.
use std::marker::PhantomData;

/// How many elements a buffer of `len` bytes can supply when walked from
/// `start` with the given element stride.
///
/// A zero stride revisits the same element forever, so the count is only
/// limited by `start` being in bounds. A negative stride walks toward the
/// front of the buffer.
fn addressable(len: usize, start: usize, stride: isize) -> usize {
    if start >= len {
        return 0;
    }
    match stride.cmp(&0) {
        std::cmp::Ordering::Greater => (len - 1 - start) / stride.unsigned_abs() + 1,
        std::cmp::Ordering::Equal => usize::MAX,
        std::cmp::Ordering::Less => start / stride.unsigned_abs() + 1,
    }
}

/// Read-only view of `u8` elements at a fixed stride.
///
/// Element `i` lives at `base + i * stride`. The view does not own its
/// backing storage; it borrows it for the duration of one kernel call.
pub struct StridedView<'a> {
    base: *const u8,
    stride: isize,
    avail: usize,
    _marker: PhantomData<&'a [u8]>,
}

impl<'a> StridedView<'a> {
    /// Borrow a view over `data`, starting at byte index `start` and walking
    /// with `stride` elements per step.
    pub fn from_slice(data: &'a [u8], start: usize, stride: isize) -> Self {
        Self {
            base: data.as_ptr().wrapping_add(start),
            stride,
            avail: addressable(data.len(), start, stride),
            _marker: PhantomData,
        }
    }

    /// Build a view from a raw pointer, for the host-runtime boundary where
    /// only pointer + stride + count are known.
    ///
    /// # Safety
    ///
    /// `base + i * stride` must be readable for every `i < avail`, and the
    /// memory must stay valid and unmodified by others for the lifetime `'a`.
    pub unsafe fn from_raw_parts(base: *const u8, stride: isize, avail: usize) -> Self {
        Self {
            base,
            stride,
            avail,
            _marker: PhantomData,
        }
    }

    /// Upper bound on the element count this view can supply.
    pub fn addressable(&self) -> usize {
        self.avail
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Read element `i`. Caller must keep `i` below `addressable()`.
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        debug_assert!(i < self.avail);
        // Validity for i < avail is established at construction.
        unsafe { *self.base.wrapping_offset(i as isize * self.stride) }
    }
}

/// Writable counterpart of [`StridedView`]; the in-place output operand.
pub struct StridedViewMut<'a> {
    base: *mut u8,
    stride: isize,
    avail: usize,
    _marker: PhantomData<&'a mut [u8]>,
}

impl<'a> StridedViewMut<'a> {
    pub fn from_slice(data: &'a mut [u8], start: usize, stride: isize) -> Self {
        let len = data.len();
        Self {
            base: data.as_mut_ptr().wrapping_add(start),
            stride,
            avail: addressable(len, start, stride),
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `base + i * stride` must be readable and writable for every
    /// `i < avail`, with exclusive write access for the lifetime `'a`.
    pub unsafe fn from_raw_parts(base: *mut u8, stride: isize, avail: usize) -> Self {
        Self {
            base,
            stride,
            avail,
            _marker: PhantomData,
        }
    }

    pub fn addressable(&self) -> usize {
        self.avail
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        debug_assert!(i < self.avail);
        unsafe { *self.base.wrapping_offset(i as isize * self.stride) }
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: u8) {
        debug_assert!(i < self.avail);
        unsafe {
            *self.base.wrapping_offset(i as isize * self.stride) = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressable_unit_stride() {
        assert_eq!(addressable(8, 0, 1), 8);
        assert_eq!(addressable(8, 3, 1), 5);
        assert_eq!(addressable(8, 7, 1), 1);
    }

    #[test]
    fn addressable_wide_stride() {
        // Elements at 0, 2, 4, 6.
        assert_eq!(addressable(8, 0, 2), 4);
        // Elements at 1, 4, 7.
        assert_eq!(addressable(8, 1, 3), 3);
        assert_eq!(addressable(8, 7, 3), 1);
    }

    #[test]
    fn addressable_negative_stride() {
        // Walking 7, 5, 3, 1.
        assert_eq!(addressable(8, 7, -2), 4);
        assert_eq!(addressable(8, 0, -1), 1);
    }

    #[test]
    fn addressable_zero_stride() {
        assert_eq!(addressable(8, 2, 0), usize::MAX);
    }

    #[test]
    fn addressable_out_of_range_start() {
        assert_eq!(addressable(8, 8, 1), 0);
        assert_eq!(addressable(0, 0, 1), 0);
        assert_eq!(addressable(0, 0, 0), 0);
    }

    #[test]
    fn read_through_strided_view() {
        let data = [10u8, 11, 12, 13, 14, 15];
        let v = StridedView::from_slice(&data, 1, 2);
        assert_eq!(v.addressable(), 3);
        assert_eq!(v.get(0), 11);
        assert_eq!(v.get(1), 13);
        assert_eq!(v.get(2), 15);
    }

    #[test]
    fn read_reversed_view() {
        let data = [1u8, 2, 3];
        let v = StridedView::from_slice(&data, 2, -1);
        assert_eq!(v.addressable(), 3);
        assert_eq!(v.get(0), 3);
        assert_eq!(v.get(1), 2);
        assert_eq!(v.get(2), 1);
    }

    #[test]
    fn write_through_mut_view() {
        let mut data = [0u8; 5];
        let mut v = StridedViewMut::from_slice(&mut data, 0, 2);
        assert_eq!(v.addressable(), 3);
        v.set(0, 7);
        v.set(2, 9);
        assert_eq!(v.get(0), 7);
        drop(v);
        assert_eq!(data, [7, 0, 0, 0, 9]);
    }

    #[test]
    fn zero_stride_view_pins_one_element() {
        let data = [42u8, 0, 0];
        let v = StridedView::from_slice(&data, 0, 0);
        assert_eq!(v.get(0), 42);
        assert_eq!(v.get(1000), 42);
    }
}
