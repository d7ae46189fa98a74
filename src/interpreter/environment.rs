use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::object::Object;

/// A shared handle to an [`Environment`].
///
/// Closures and call frames hold these; an environment lives as long as its
/// longest holder.
pub type Env = Rc<RefCell<Environment>>;

/// A binding table with an optional enclosing scope.
///
/// Lookup walks outward through the enclosing scopes. Binding always writes
/// into this table, shadowing outer bindings of the same name and never
/// touching them.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a root environment with no bindings.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, object::Object};
    ///
    /// let env = Environment::new();
    /// assert!(env.borrow().is_empty());
    ///
    /// env.borrow_mut().set("x", Object::integer(5));
    ///
    /// assert_eq!(env.borrow().len(), 1);
    /// assert_eq!(env.borrow().get("x").unwrap().inspect(), "5");
    /// assert!(env.borrow().get("y").is_none());
    /// ```
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, object::Object};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x", Object::integer(1));
    ///
    /// let inner = Environment::new_enclosed(&outer);
    /// inner.borrow_mut().set("x", Object::integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x").unwrap().inspect(), "2");
    /// assert_eq!(outer.borrow().get("x").unwrap().inspect(), "1");
    ///
    /// // Outer bindings are visible but not counted.
    /// let empty = Environment::new_enclosed(&outer);
    /// assert!(empty.borrow().is_empty());
    /// assert!(empty.borrow().get("x").is_some());
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Resolves `name` in this scope or the nearest enclosing one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        match self.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope.
    pub fn set(&mut self, name: impl Into<String>, value: Rc<Object>) {
        self.store.insert(name.into(), value);
    }

    /// Returns `true` if `name` is bound in this scope itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Returns the number of bindings in this scope, not counting outer ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if this scope has no bindings of its own.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("enclosed", &self.outer.is_some())
         .finish()
    }
}
