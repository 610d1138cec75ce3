//! FFI interface for the host that owns the page
//!
//! The host (browser extension bridge, desktop shell) passes the page HTML and
//! a JSON request, and gets back the serialized `Export` or an error message.
//! Clipboard and download handling stay on the host side.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use serde::Deserialize;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::{export_html, Export};

/// Request sent by the host
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    /// Address of the page the HTML was captured from
    pub url: String,
    #[serde(default)]
    pub config: ExportConfig,
}

/// Result struct returned to the host
/// Both pointers are owned by Rust and must be freed via free_export_result
#[repr(C)]
pub struct ExportResultFFI {
    /// JSON-serialized `Export` (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if the export failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract, render and name one listing page.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
/// * `request_json` - JSON-serialized ExportRequest (null-terminated)
///
/// # Returns
/// ExportResultFFI with either json_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `request_json` must be a valid null-terminated C string
/// - Caller must free the result via `free_export_result`
#[no_mangle]
pub unsafe extern "C" fn export_listing_ffi(
    html_ptr: *const c_char,
    html_len: usize,
    request_json: *const c_char,
) -> ExportResultFFI {
    let html = if html_ptr.is_null() || html_len == 0 {
        ""
    } else {
        let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
        match std::str::from_utf8(slice) {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in HTML content"),
        }
    };

    if request_json.is_null() {
        return make_error_result("Request JSON is null");
    }
    let request_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return make_error_result("Invalid UTF-8 in request JSON"),
    };

    match run_export(html, request_str) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ExportResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&e.to_string()),
    }
}

/// Free an ExportResultFFI returned by export_listing_ffi
///
/// # Safety
/// - `result` must have been returned by `export_listing_ffi`
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_export_result(result: ExportResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

fn run_export(html: &str, request_json: &str) -> Result<String> {
    let request: ExportRequest = serde_json::from_str(request_json)?;
    let export: Export = export_html(html, &request.url, &request.config)?;
    Ok(serde_json::to_string(&export)?)
}

// Helper to create error result
fn make_error_result(msg: &str) -> ExportResultFFI {
    let error_cstr = CString::new(msg)
        .or_else(|_| CString::new(msg.replace('\0', "")))
        .unwrap_or_default();
    ExportResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
