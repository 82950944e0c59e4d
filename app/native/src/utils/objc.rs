//! Objective-C helper utilities for macOS integration.
//!
//! Provides `NSString` conversions and the small amount of `NSNumber` glue
//! the wallpaper backend needs.

use std::ffi::c_void;

use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};

/// Creates an `NSString` from a Rust string slice.
///
/// # Safety
///
/// The caller must ensure that the Objective-C runtime is properly initialized.
///
/// # Returns
///
/// A pointer to an autoreleased `NSString` object.
#[must_use]
pub unsafe fn nsstring(s: &str) -> *mut Object {
    let nsstring_class = class!(NSString);
    let bytes = s.as_ptr().cast::<c_void>();
    let len = s.len();
    let encoding: usize = 4; // NSUTF8StringEncoding

    unsafe {
        msg_send![
            nsstring_class,
            stringWithBytes: bytes
            length: len
            encoding: encoding
        ]
    }
}

/// Converts an `NSString` to a Rust `String`.
///
/// Returns an empty string if the input is null or conversion fails.
///
/// # Safety
///
/// The caller must ensure that `nsstring` is either null or a valid `NSString` pointer.
#[must_use]
pub unsafe fn nsstring_to_string(nsstring: *mut Object) -> String {
    if nsstring.is_null() {
        return String::new();
    }

    let c_str: *const std::ffi::c_char = unsafe { msg_send![nsstring, UTF8String] };
    if c_str.is_null() {
        return String::new();
    }

    // SAFETY: c_str is verified non-null above, and UTF8String returns a valid C string
    unsafe { std::ffi::CStr::from_ptr(c_str) }.to_string_lossy().into_owned()
}

/// Returns the `localizedDescription` of an `NSError`, or `None` for null.
///
/// # Safety
///
/// The caller must ensure that `error` is either null or a valid `NSError` pointer.
#[must_use]
pub unsafe fn nserror_description(error: *mut Object) -> Option<String> {
    if error.is_null() {
        return None;
    }

    let desc: *mut Object = unsafe { msg_send![error, localizedDescription] };
    let desc = unsafe { nsstring_to_string(desc) };
    if desc.is_empty() { None } else { Some(desc) }
}
