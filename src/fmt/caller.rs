//! Caller identity: where a record came from and how its function name is displayed.
//!
//! Names are held in a qualified `<path>/<package>.<function>` form. Rust paths
//! (`app::net::conn::handshake`) are normalized into it (`app/net/conn.handshake`)
//! so the display styles trim the same way regardless of where the name came from.

use std::panic::Location;
use std::path::Path;

/// Placeholder for callers captured without function information.
pub const UNKNOWN_FUNCTION: &str = "?";

/// How much of the qualified function name to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionStyle {
    /// `app/net/conn.handshake`
    #[default]
    Full,
    /// `conn.handshake`
    Package,
    /// `handshake`
    Short,
}

impl FunctionStyle {
    /// Trims `qualified` according to the style.
    ///
    /// Both trims search from the end so a separator inside an earlier
    /// segment never shortens the result.
    #[must_use]
    pub fn apply(self, qualified: &str) -> &str {
        match self {
            Self::Full => qualified,
            Self::Package => after_last(qualified, '/'),
            Self::Short => after_last(qualified, '.'),
        }
    }
}

impl std::str::FromStr for FunctionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "package" | "pkg" => Ok(Self::Package),
            "short" => Ok(Self::Short),
            _ => Err(format!("unknown function style: '{s}'")),
        }
    }
}

fn after_last(s: &str, sep: char) -> &str {
    s.rfind(sep).map_or(s, |i| &s[i + sep.len_utf8()..])
}

/// Final path component, or the input unchanged when it has none.
#[must_use]
pub fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
}

/// Converts `a::b::c::func` into `a/b/c.func`.
///
/// Trailing `{{closure}}` segments are dropped, so code inside a closure is
/// attributed to the function that contains it.
#[must_use]
pub fn qualify(rust_path: &str) -> String {
    let mut rust_path = rust_path;
    while let Some(outer) = rust_path.strip_suffix("::{{closure}}") {
        rust_path = outer;
    }
    match rust_path.rsplit_once("::") {
        Some((module, function)) => format!("{}.{function}", module.replace("::", "/")),
        None => rust_path.to_string(),
    }
}

/// Source location and function of the code that issued a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
    /// Qualified `<path>/<package>.<function>` name.
    pub function: String,
}

impl Caller {
    /// Built by [`caller!`](crate::caller) from `file!()`, `line!()` and the enclosing function's Rust path.
    #[must_use]
    pub fn new(file: &str, line: u32, rust_path: &str) -> Self {
        Self {
            file: file.to_string(),
            line,
            function: qualify(rust_path),
        }
    }

    /// `#[track_caller]` only yields file and line, so the function stays unknown.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            function: UNKNOWN_FUNCTION.to_string(),
        }
    }

    /// File as displayed in a record.
    #[must_use]
    pub fn display_file(&self, use_basename: bool) -> &str {
        if use_basename {
            basename(&self.file)
        } else {
            &self.file
        }
    }

    /// Function as displayed in a record.
    #[must_use]
    pub fn display_function(&self, style: FunctionStyle) -> &str {
        style.apply(&self.function)
    }
}

/// Captures the [`Caller`] at the macro's expansion site.
#[macro_export]
macro_rules! caller {
    () => {{
        fn __hwlog_here() {}
        fn __hwlog_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __hwlog_type_name(__hwlog_here);
        let name = name.strip_suffix("::__hwlog_here").unwrap_or(name);
        $crate::fmt::Caller::new(file!(), line!(), name)
    }};
}
