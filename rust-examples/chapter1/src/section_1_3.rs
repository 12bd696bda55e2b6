//! Section 1.3: Scope and the Development Environment
//!
//! A package-level variable is visible from every function, and a local one
//! only inside the function that declares it. Instead of a process-wide mutable
//! global, the bindings here live in an explicit [`Scope`] value that callers
//! pass down. Frames are persistent `im::HashMap`s, so entering a function
//! shares the outer bindings without copying them.
//!
//! ```text
//! global frame      { g: 42 }
//!    │
//!    ├── new_func   { y: 42.02 }   sees g, y
//!    └── next_func  { }            sees g only
//! ```

use std::fmt;

use im::HashMap as ImHashMap;

/// A chain of lexical frames, innermost first.
///
/// # Example
///
/// ```
/// use basics_chapter1::section_1_3::Scope;
///
/// let global = Scope::new().declare("g", 42);
/// let local = global.enter().declare("y", 7);
///
/// assert_eq!(local.resolve("g"), Some(&42));
/// assert_eq!(local.resolve("y"), Some(&7));
/// assert_eq!(global.resolve("y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Scope<V> {
    frame: ImHashMap<String, V>,
    outer: Option<Box<Scope<V>>>,
}

impl<V: Clone> Default for Scope<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Scope<V> {
    /// An empty outermost scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: ImHashMap::new(),
            outer: None,
        }
    }

    /// Returns a scope with `name` bound in the innermost frame.
    ///
    /// Redeclaring a name in the same frame replaces it; `self` is unchanged.
    #[must_use]
    pub fn declare(&self, name: &str, value: V) -> Self {
        Self {
            frame: self.frame.update(name.to_string(), value),
            outer: self.outer.clone(),
        }
    }

    /// Opens a new, empty inner frame, as when a function body starts.
    #[must_use]
    pub fn enter(&self) -> Self {
        Self {
            frame: ImHashMap::new(),
            outer: Some(Box::new(self.clone())),
        }
    }

    /// Drops the innermost frame. The outermost scope has nothing to leave.
    #[must_use]
    pub fn leave(&self) -> Option<Self> {
        self.outer.as_deref().cloned()
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&V> {
        self.frame
            .get(name)
            .or_else(|| self.outer.as_ref().and_then(|outer| outer.resolve(name)))
    }

    /// True if `name` is declared in the innermost frame itself.
    #[must_use]
    pub fn is_local(&self, name: &str) -> bool {
        self.frame.contains_key(name)
    }

    /// Number of frames, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.outer.as_ref().map_or(0, |outer| outer.depth())
    }
}

/// Values stored in the scope walkthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The outermost scope of the walkthrough: `g = 42`.
#[must_use]
pub fn package_scope() -> Scope<Value> {
    Scope::new().declare("g", Value::Int(42))
}

fn show(scope: &Scope<Value>, name: &str) -> String {
    match scope.resolve(name) {
        Some(value) => value.to_string(),
        None => format!("{name}: not in scope"),
    }
}

/// A function that reads the outer `g` and declares its own `y`.
#[must_use]
pub fn new_func(outer: &Scope<Value>) -> Vec<String> {
    let body = outer.enter().declare("y", Value::Float(42.02));
    vec![show(&body, "g"), show(&body, "y")]
}

/// A sibling function: `g` is visible, `new_func`'s `y` is not.
#[must_use]
pub fn next_func(outer: &Scope<Value>) -> Vec<String> {
    let body = outer.enter();
    vec![show(&body, "g"), show(&body, "y")]
}

/// Operating system and CPU architecture this binary was built for.
///
/// # Example
/// ```
/// use basics_chapter1::section_1_3::platform;
/// let (os, arch) = platform();
/// assert!(!os.is_empty() && !arch.is_empty());
/// ```
#[must_use]
pub fn platform() -> (&'static str, &'static str) {
    (std::env::consts::OS, std::env::consts::ARCH)
}
