//! Caller identity for enter/exit lines
//!
//! A `CallSite` is captured where the trace call is written, not recovered
//! from the runtime stack. `call_site!()` takes the path of the enclosing
//! function from `std::any::type_name` of a nested item and reduces it to
//! `Scope::function`.

use std::borrow::Cow;
use std::fmt;

/// Name of the item `call_site!()` declares inside the traced function
#[doc(hidden)]
pub const CALL_SITE_MARKER: &str = "__tracelog_call_site";

const UNKNOWN_LABEL: &str = "unknown";

/// `Scope::function` label shown in enter and exit lines
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    scope: Cow<'static, str>,
    function: Cow<'static, str>,
}

impl CallSite {
    /// Create a call site from explicit parts
    ///
    /// ```
    /// use tracelog_core::CallSite;
    ///
    /// assert_eq!(CallSite::new("Net", "connect").to_string(), "Net::connect");
    /// ```
    pub fn new(scope: impl Into<Cow<'static, str>>, function: impl Into<Cow<'static, str>>) -> Self {
        Self {
            scope: scope.into(),
            function: function.into(),
        }
    }

    /// A call site that could not be resolved; renders as `unknown`
    pub const fn unknown() -> Self {
        Self {
            scope: Cow::Borrowed(""),
            function: Cow::Borrowed(""),
        }
    }

    /// Derive a call site from a function path as produced by `type_name`
    ///
    /// Falls back to `CallSite::unknown()` when nothing usable is left.
    ///
    /// ```
    /// use tracelog_core::CallSite;
    ///
    /// let site = CallSite::from_path("app::net::<impl app::net::Net>::connect::{{closure}}");
    /// assert_eq!(site.to_string(), "Net::connect");
    /// assert!(CallSite::from_path("").is_unknown());
    /// ```
    pub fn from_path(path: &str) -> Self {
        let mut segments: Vec<String> = split_path(path)
            .into_iter()
            .filter(|seg| !seg.starts_with("{{"))
            .map(normalize_segment)
            .filter(|seg| !seg.is_empty())
            .collect();

        if segments.last().map(String::as_str) == Some(CALL_SITE_MARKER) {
            segments.pop();
        }

        match segments.len() {
            0 => Self::unknown(),
            1 => Self::new("", segments.remove(0)),
            n => {
                let function = segments.remove(n - 1);
                let scope = segments.remove(n - 2);
                Self::new(scope, function)
            }
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn is_unknown(&self) -> bool {
        self.function.is_empty()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str(UNKNOWN_LABEL)
        } else if self.scope.is_empty() {
            f.write_str(&self.function)
        } else {
            write!(f, "{}::{}", self.scope, self.function)
        }
    }
}

/// `type_name` of a value's type; used by `call_site!()` on a fn item
#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Split on `::` outside of angle brackets
fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside fn pointer types is not a closing bracket
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Reduce `<impl a::Net>`, `<a::Net as a::Dial>` and `Net<T>` to `Net`
fn normalize_segment(segment: &str) -> String {
    if segment.starts_with('<') && segment.ends_with('>') && segment.len() >= 2 {
        let mut inner = &segment[1..segment.len() - 1];
        if let Some(rest) = inner.strip_prefix("impl ") {
            inner = rest;
            if let Some(idx) = find_top_level(inner, " for ") {
                inner = &inner[idx + " for ".len()..];
            }
        } else if let Some(idx) = find_top_level(inner, " as ") {
            inner = &inner[..idx];
        }
        let inner = inner.trim_start_matches('&').trim_start_matches("mut ");
        return match split_path(inner).last() {
            Some(last) if !last.starts_with('<') => strip_generics(last).to_string(),
            Some(last) => normalize_segment(last),
            None => String::new(),
        };
    }
    strip_generics(segment).to_string()
}

fn strip_generics(segment: &str) -> &str {
    match segment.find('<') {
        Some(idx) => &segment[..idx],
        None => segment,
    }
}

fn find_top_level(haystack: &str, needle: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in haystack.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 && haystack[idx..].starts_with(needle) => return Some(idx),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_function() {
        let site = CallSite::from_path("app::net::connect::__tracelog_call_site");
        assert_eq!(site.scope(), "net");
        assert_eq!(site.function(), "connect");
        assert_eq!(site.to_string(), "net::connect");
    }

    #[test]
    fn test_inherent_method() {
        let site = CallSite::from_path("app::net::Net::connect::__tracelog_call_site");
        assert_eq!(site.to_string(), "Net::connect");
    }

    #[test]
    fn test_impl_block_segment() {
        let site = CallSite::from_path("app::net::<impl app::net::Net>::connect");
        assert_eq!(site.to_string(), "Net::connect");
    }

    #[test]
    fn test_trait_impl() {
        let site = CallSite::from_path("<app::net::Net as app::Dial>::dial::__tracelog_call_site");
        assert_eq!(site.to_string(), "Net::dial");

        let site = CallSite::from_path("app::<impl app::Dial for app::net::Net>::dial");
        assert_eq!(site.to_string(), "Net::dial");
    }

    #[test]
    fn test_generic_type() {
        let site = CallSite::from_path("<app::Pool<alloc::string::String> as app::Dial>::dial");
        assert_eq!(site.to_string(), "Pool::dial");

        let site = CallSite::from_path("app::Pool<T>::get");
        assert_eq!(site.to_string(), "Pool::get");
    }

    #[test]
    fn test_closures_are_skipped() {
        let site = CallSite::from_path("app::worker::run::{{closure}}::{{closure}}::__tracelog_call_site");
        assert_eq!(site.to_string(), "worker::run");
    }

    #[test]
    fn test_single_segment() {
        let site = CallSite::from_path("main");
        assert_eq!(site.scope(), "");
        assert_eq!(site.to_string(), "main");
    }

    #[test]
    fn test_unresolvable_paths() {
        assert!(CallSite::from_path("").is_unknown());
        assert!(CallSite::from_path("::").is_unknown());
        assert!(CallSite::from_path("__tracelog_call_site").is_unknown());
        assert_eq!(CallSite::unknown().to_string(), "unknown");
    }

    #[test]
    fn test_fn_pointer_in_generics() {
        let site = CallSite::from_path("app::Hook<fn() -> u8>::fire");
        assert_eq!(site.to_string(), "Hook::fire");
    }

    #[test]
    fn test_type_name_of_fn_item() {
        fn probe() {}
        let path = type_name_of(probe);
        assert!(path.ends_with("probe"));
        assert_eq!(CallSite::from_path(path).function(), "probe");
    }
}
