//! A C API for normalising names.
//!
//! Strings returned by this module are owned by the caller and must be
//! released with `name_case_free_string`. A null input pointer is treated
//! as a missing name.

extern crate libc;

use self::libc::c_char;
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! str_to_char_star {
    ($str:expr) => {{
        // Outputs are derived from a C string, so they cannot contain NUL
        match CString::new($str) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    }};
}

unsafe fn from_c<'a>(input: *const c_char) -> Option<Cow<'a, str>> {
    if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_case_normalise(input: *const c_char) -> *const c_char {
    let input = from_c(input);
    str_to_char_star!(super::normalise(input.as_deref()).into_owned())
}

#[no_mangle]
pub unsafe extern "C" fn name_case_is_normalised(input: *const c_char) -> bool {
    let input = from_c(input);
    super::is_normalised(input.as_deref())
}

#[no_mangle]
pub unsafe extern "C" fn name_case_normalise_whitespace(input: *const c_char) -> *const c_char {
    let input = from_c(input);
    str_to_char_star!(super::normalise_whitespace_to_empty(input.as_deref()).into_owned())
}

#[no_mangle]
pub unsafe extern "C" fn name_case_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}
