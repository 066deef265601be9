//! Shared handles stored inside [`Value`]: callables and opaque host objects.
//!
//! Both handles are reference counted, so cloning a value that holds one is
//! cheap and the clone refers to the same underlying function or object.
//! Equality is identity.

use std::{any::Any, fmt, sync::Arc};

use super::Value;

type Callable = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

/// A callable value.
///
/// Every call receives a receiver value (`this`) and a slice of arguments and
/// returns a single [`Value`].
///
/// # Examples
///
/// ```
/// use dark_fns::{Function, Value};
///
/// let greet = Function::from_fn(|args| {
///     Value::from(format!("hello {}", args[0]))
/// });
/// assert_eq!(greet.invoke(&[Value::from("John")]), "hello John");
///
/// // Receiver-aware functions see the value they were called on
/// let receiver = Function::new(|this, _args| this.clone());
/// assert_eq!(receiver.call(&Value::from(7), &[]), 7);
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Arc<Callable>,
}

impl Function {
    /// Creates a function from a closure taking the receiver and arguments.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Creates a function from a closure that ignores the receiver.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::new(move |_this, args| f(args))
    }

    /// Calls the function with an explicit receiver.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.inner)(this, args)
    }

    /// Calls the function with an undefined receiver.
    pub fn invoke(&self, args: &[Value]) -> Value {
        self.call(&Value::Undefined, args)
    }

    /// Returns true if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// An opaque host object carried through a [`Value`].
///
/// Natives exist so callers can ask whether a value is an instance of a given
/// Rust type (see [`crate::assert::is_instance_of`]). They have no
/// properties and serialize as an empty mapping.
#[derive(Clone)]
pub struct Native {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Native {
    /// Wraps a host object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns true if the wrapped object is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    /// Returns the wrapped object if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Returns the Rust type name of the wrapped object.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native({})", self.type_name)
    }
}
