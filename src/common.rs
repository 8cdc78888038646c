//! Volatile register handles.
//!
//! Same shape as the register API of the generated peripheral access crates:
//! a [`Reg`] is a typed pointer to one memory-mapped word, with `read`,
//! `write`, `write_value` and `modify` gated on the access marker.

use core::marker::PhantomData;

/// Read-write access marker.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RW;
/// Read-only access marker.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct R;
/// Write-only access marker.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct W;

mod sealed {
    use super::*;
    pub trait Access {}
    impl Access for R {}
    impl Access for W {}
    impl Access for RW {}
}

/// Register access marker.
pub trait Access: sealed::Access + Copy {}
impl Access for R {}
impl Access for W {}
impl Access for RW {}

/// Access markers that allow reading.
pub trait Read: Access {}
impl Read for RW {}
impl Read for R {}

/// Access markers that allow writing.
pub trait Write: Access {}
impl Write for RW {}
impl Write for W {}

/// A single memory-mapped register holding a `T`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Reg<T: Copy, A: Access> {
    ptr: *mut u8,
    phantom: PhantomData<*mut (T, A)>,
}

unsafe impl<T: Copy, A: Access> Send for Reg<T, A> {}
unsafe impl<T: Copy, A: Access> Sync for Reg<T, A> {}

impl<T: Copy, A: Access> Reg<T, A> {
    /// # Safety
    ///
    /// `ptr` must be valid for volatile reads and writes of `T` for as long as
    /// the handle is used.
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut T) -> Self {
        Self {
            ptr: ptr as _,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr as _
    }
}

impl<T: Copy, A: Read> Reg<T, A> {
    #[inline(always)]
    pub fn read(&self) -> T {
        unsafe { (self.ptr as *mut T).read_volatile() }
    }
}

impl<T: Copy, A: Write> Reg<T, A> {
    #[inline(always)]
    pub fn write_value(&self, val: T) {
        unsafe { (self.ptr as *mut T).write_volatile(val) }
    }
}

impl<T: Default + Copy, A: Write> Reg<T, A> {
    /// Write the register starting from its default value.
    #[inline(always)]
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = Default::default();
        let res = f(&mut val);
        self.write_value(val);
        res
    }
}

impl<T: Copy, A: Read + Write> Reg<T, A> {
    /// Read-modify-write.
    #[inline(always)]
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = self.read();
        let res = f(&mut val);
        self.write_value(val);
        res
    }
}
