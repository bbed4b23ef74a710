// C entry points. Every call is self-contained; strings returned to the
// caller must be released with `wordplay_string_free`.
use crate::config::validate_dictionary;
use crate::core::cipher::shift_text;
use crate::core::substrings::count_substrings;
use crate::core::types::DEFAULT_DICTIONARY;
use crate::error::{Result, WordplayError};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use tracing::{error, warn};

unsafe fn str_arg<'a>(ptr: *const c_char, name: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(WordplayError::InvalidArgument(name));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| WordplayError::InvalidArgument(name))
}

/// Parses the caller's dictionary and applies the same checks as a config
/// file, so an empty entry is refused here too.
fn dictionary_arg(json: Option<&str>) -> Result<Vec<String>> {
    let Some(json) = json else {
        return Ok(DEFAULT_DICTIONARY.iter().map(|w| w.to_string()).collect());
    };
    let dictionary: Vec<String> = serde_json::from_str(json)
        .map_err(|_| WordplayError::InvalidArgument("dictionary_json"))?;
    validate_dictionary(&dictionary)
        .map_err(|_| WordplayError::InvalidArgument("dictionary_json"))?;
    Ok(dictionary)
}

/// Runs `f`, turning precondition failures and panics into a null pointer.
fn into_c_string<F>(what: &str, f: F) -> *mut c_char
where
    F: FnOnce() -> Result<String>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(out)) => CString::new(out).map_or(ptr::null_mut(), CString::into_raw),
        Ok(Err(e)) => {
            warn!(call = what, error = %e, "rejected call");
            ptr::null_mut()
        }
        Err(_) => {
            error!(call = what, "panic caught at C boundary");
            ptr::null_mut()
        }
    }
}

/// Shifts `text` and returns a newly allocated string, or null if `text` is
/// null or not UTF-8.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn wordplay_shift_text(text: *const c_char, shift: i64) -> *mut c_char {
    into_c_string("shift_text", || {
        let text = str_arg(text, "text")?;
        Ok(shift_text(text, shift))
    })
}

/// Counts dictionary substrings in `phrase` and returns the counts as a JSON
/// object. `dictionary_json` is a JSON array of strings; null selects the
/// built-in dictionary. Returns null on any invalid argument.
///
/// # Safety
/// Both pointers must be null or point to NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn wordplay_count_substrings(
    phrase: *const c_char,
    dictionary_json: *const c_char,
) -> *mut c_char {
    into_c_string("count_substrings", || {
        let phrase = str_arg(phrase, "phrase")?;
        let json = if dictionary_json.is_null() {
            None
        } else {
            Some(str_arg(dictionary_json, "dictionary_json")?)
        };
        let dictionary = dictionary_arg(json)?;
        let counts = count_substrings(phrase, &dictionary);
        Ok(serde_json::to_string(&counts)?)
    })
}

/// Releases a string returned by this library. Null is ignored.
///
/// # Safety
/// `s` must be null or a pointer previously returned by this library that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn wordplay_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
