//! The fixed route table.

/// A route the fixture answers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/test`: echo the method and the parsed body.
    Test,
    /// `/headers`: report custom request headers.
    Headers,
    /// `/echo`: echo the parsed body.
    Echo,
    /// `/slow`: answer after a delay.
    Slow,
    /// Anything else.
    NotFound,
}

impl Route {
    /// Resolve a request path. Matching is exact and case-sensitive.
    pub fn resolve(path: &str) -> Self {
        match path {
            "/test" => Route::Test,
            "/headers" => Route::Headers,
            "/echo" => Route::Echo,
            "/slow" => Route::Slow,
            _ => Route::NotFound,
        }
    }
}

/// Remove `.` and `..` segments from a request path, the way a URL parser
/// does when building `pathname`. Percent-encoded dots (`%2e`) count as dots.
/// Paths that do not start with `/` are returned unchanged.
pub fn normalize_path(path: &str) -> String {
    let Some(rest) = path.strip_prefix('/') else {
        return path.to_string();
    };

    let raw: Vec<&str> = rest.split('/').collect();
    let mut segments: Vec<&str> = Vec::with_capacity(raw.len());

    for (i, &segment) in raw.iter().enumerate() {
        let last = i + 1 == raw.len();
        if is_double_dot(segment) {
            segments.pop();
            if last {
                segments.push("");
            }
        } else if is_single_dot(segment) {
            if last {
                segments.push("");
            }
        } else {
            segments.push(segment);
        }
    }

    format!("/{}", segments.join("/"))
}

fn is_single_dot(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

fn is_double_dot(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        ".." | ".%2e" | "%2e." | "%2e%2e"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_paths() {
        assert_eq!(normalize_path("/test"), "/test");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/a//b"), "/a//b");
        assert_eq!(normalize_path("*"), "*");
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(normalize_path("/x/../test"), "/test");
        assert_eq!(normalize_path("/./echo"), "/echo");
        assert_eq!(normalize_path("/a/b/../../slow"), "/slow");
        assert_eq!(normalize_path("/../../headers"), "/headers");
        assert_eq!(normalize_path("/x/.."), "/");
        assert_eq!(normalize_path("/x/."), "/x/");
        assert_eq!(normalize_path("/x/%2E%2e/test"), "/test");
        assert_eq!(normalize_path("/x/.%2e/echo"), "/echo");
        assert_eq!(normalize_path("/x/%2e/echo"), "/x/echo");
    }

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/test"), Route::Test);
        assert_eq!(Route::resolve("/headers"), Route::Headers);
        assert_eq!(Route::resolve("/echo"), Route::Echo);
        assert_eq!(Route::resolve("/slow"), Route::Slow);
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(Route::resolve("/TEST"), Route::NotFound);
        assert_eq!(Route::resolve("/test/"), Route::NotFound);
        assert_eq!(Route::resolve("/echo/more"), Route::NotFound);
        assert_eq!(Route::resolve("/"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
    }
}
