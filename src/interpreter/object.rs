use std::{fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::environment::Env,
};

thread_local! {
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
    static NULL: Rc<Object> = Rc::new(Object::Null);
}

/// The type tag of an [`Object`], as shown in runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `ERROR`
    Error,
    /// `FUNCTION`
    Function,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::Error => "ERROR",
            Self::Function => "FUNCTION",
        };
        write!(f, "{tag}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// Values are handled through `Rc<Object>` handles. `true`, `false` and
/// `null` each exist exactly once per thread and are only obtained through
/// [`Object::boolean`] and [`Object::null`]; equality between non-integer
/// values is handle identity, which is only sound because of that.
#[derive(Debug)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`. Use [`Object::boolean`] to obtain one.
    Boolean(bool),
    /// The absence of a value. Use [`Object::null`] to obtain it.
    Null,
    /// A runtime fault, handed to the caller as the result of the evaluation.
    Error(RuntimeError),
    /// A closure.
    Function(Function),
}

/// A function value: parameters, body, and the environment it was defined in.
#[derive(Clone)]
pub struct Function {
    /// The parameter names, bound positionally on each call.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
    /// The captured defining environment.
    pub env:        Env,
}

// The captured environment may contain this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl Object {
    /// Returns the shared `true` or `false` instance.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use monkey::interpreter::object::Object;
    ///
    /// assert!(Rc::ptr_eq(&Object::boolean(true), &Object::boolean(true)));
    /// assert!(!Rc::ptr_eq(&Object::boolean(true), &Object::boolean(false)));
    /// ```
    #[must_use]
    pub fn boolean(value: bool) -> Rc<Self> {
        if value {
            TRUE.with(Rc::clone)
        } else {
            FALSE.with(Rc::clone)
        }
    }

    /// Returns the shared `null` instance.
    #[must_use]
    pub fn null() -> Rc<Self> {
        NULL.with(Rc::clone)
    }

    /// Allocates an integer value.
    #[must_use]
    pub fn integer(value: i64) -> Rc<Self> {
        Rc::new(Self::Integer(value))
    }

    /// Returns the type tag of the value.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::Error(_) => ObjectType::Error,
            Self::Function(_) => ObjectType::Function,
        }
    }

    /// Maps the value to a boolean for use in conditionals.
    ///
    /// `null` and `false` are falsy; every other value, including `0`, is
    /// truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns `true` if the value is a runtime error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Renders the value for display.
    ///
    /// Integers print as decimal digits, booleans as `true`/`false`, null as
    /// `null`, errors as `ERROR: <message>`. Functions print their parameter
    /// list with an elided body.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::Object;
    ///
    /// assert_eq!(Object::integer(-7).inspect(), "-7");
    /// assert_eq!(Object::boolean(false).inspect(), "false");
    /// assert_eq!(Object::null().inspect(), "null");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Null => "null".to_string(),
            Self::Error(error) => format!("ERROR: {error}"),
            Self::Function(function) => {
                let parameters = function.parameters
                                         .iter()
                                         .map(|p| p.name.as_str())
                                         .collect::<Vec<_>>()
                                         .join(", ");
                format!("fn({parameters}) {{ ... }}")
            },
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}
