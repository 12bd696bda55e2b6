//! Section 2.2: Switch
//!
//! A `match` runs exactly one arm. Some languages let a case "fall through"
//! into the next one; Rust has no such keyword, so [`FallthroughSwitch`]
//! models it as an ordered list of branches where the first match and every
//! branch after it run.

/// Names a number between one and three.
///
/// # Example
/// ```
/// use basics_chapter2::section_2_2::classify_number;
/// assert_eq!(classify_number(2), "two");
/// assert_eq!(classify_number(0), "other than one, two, three");
/// ```
#[must_use]
pub fn classify_number(x: i64) -> &'static str {
    match x {
        1 => "one",
        2 => "two",
        3 => "three",
        _ => "other than one, two, three",
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool>;
type Action<T> = Box<dyn Fn(&T) -> String>;

struct Branch<T> {
    matches: Predicate<T>,
    action: Action<T>,
}

/// Ordered condition/action pairs with fallthrough.
///
/// Evaluation finds the first branch whose condition holds, then runs that
/// branch and every later one, including the default, without testing their
/// conditions. If no branch matches, only the default runs.
///
/// # Example
///
/// ```
/// use basics_chapter2::section_2_2::FallthroughSwitch;
///
/// let switch = FallthroughSwitch::new()
///     .case(|y: &i64| *y == 1, |_| "one".to_string())
///     .case(|y| *y == 2, |_| "two".to_string())
///     .case(|y| *y == 3, |_| "three".to_string())
///     .otherwise(|_| "other".to_string());
///
/// assert_eq!(switch.run(&2), vec!["two", "three", "other"]);
/// assert_eq!(switch.run(&9), vec!["other"]);
/// ```
pub struct FallthroughSwitch<T> {
    branches: Vec<Branch<T>>,
    default: Option<Action<T>>,
}

impl<T> Default for FallthroughSwitch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FallthroughSwitch<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            default: None,
        }
    }

    /// Adds a branch after the existing ones.
    #[must_use]
    pub fn case<P, A>(mut self, matches: P, action: A) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        A: Fn(&T) -> String + 'static,
    {
        self.branches.push(Branch {
            matches: Box::new(matches),
            action: Box::new(action),
        });
        self
    }

    /// Sets the action that runs last, or alone when nothing matches.
    #[must_use]
    pub fn otherwise<A>(mut self, action: A) -> Self
    where
        A: Fn(&T) -> String + 'static,
    {
        self.default = Some(Box::new(action));
        self
    }

    /// Runs the switch for `value`, returning the output of each action run.
    pub fn run(&self, value: &T) -> Vec<String> {
        let start = self
            .branches
            .iter()
            .position(|branch| (branch.matches)(value))
            .unwrap_or(self.branches.len());

        let mut output: Vec<String> = self.branches[start..]
            .iter()
            .map(|branch| (branch.action)(value))
            .collect();
        if let Some(action) = &self.default {
            output.push(action(value));
        }
        output
    }

    /// Number of non-default branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// The one/two/three switch where every case falls through.
#[must_use]
pub fn number_fallthrough() -> FallthroughSwitch<i64> {
    FallthroughSwitch::<i64>::new()
        .case(|y| *y == 1, |_| "one".to_string())
        .case(|y| *y == 2, |_| "two".to_string())
        .case(|y| *y == 3, |_| "three".to_string())
        .otherwise(|_| "other than one, two, three".to_string())
}
