//! Variable-arity argument normalization.
//!
//! An [`ArgsSpec`] pairs a sequence of default arguments with a table of
//! [`ArityRule`]s indexed by how many arguments a call received. Resolving a
//! call picks the rule for its arity, produces a replacement sequence and
//! overlays it onto a copy of the defaults with [`def_assign`], so undefined
//! positions keep their default.

use std::{borrow::Cow, fmt, sync::Arc};

use crate::{
    array::def_assign,
    value::{Function, Value},
};

type Transform = dyn Fn(&[Value]) -> Vec<Value> + Send + Sync;

/// What to overlay onto the defaults for one call arity.
#[derive(Clone, Default)]
pub enum ArityRule {
    /// Overlay the raw call arguments.
    #[default]
    PassThrough,
    /// Overlay a fixed sequence, ignoring the call arguments.
    Replace(Vec<Value>),
    /// Overlay the sequence computed from the call arguments.
    Transform(Arc<Transform>),
}

impl ArityRule {
    /// Creates a [`ArityRule::Transform`] rule from a closure.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        ArityRule::Transform(Arc::new(f))
    }

    /// Produces the replacement sequence for `args`.
    fn apply<'a>(&'a self, args: &'a [Value]) -> Cow<'a, [Value]> {
        match self {
            ArityRule::PassThrough => Cow::Borrowed(args),
            ArityRule::Replace(values) => Cow::Borrowed(values.as_slice()),
            ArityRule::Transform(f) => Cow::Owned(f(args)),
        }
    }
}

impl fmt::Debug for ArityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityRule::PassThrough => f.write_str("PassThrough"),
            ArityRule::Replace(values) => f.debug_tuple("Replace").field(values).finish(),
            ArityRule::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Default arguments plus per-arity overlay rules.
///
/// # Examples
///
/// ```
/// use dark_fns::{Value, function::ArgsSpec};
///
/// // (start = 0, end, step = 1), where a lone argument is the end
/// let spec = ArgsSpec::new([Value::from(0), Value::Undefined, Value::from(1)])
///     .with_transform(1, |args| vec![Value::Undefined, args[0].clone()]);
///
/// assert_eq!(
///     spec.resolve(&[Value::from(5)]),
///     vec![Value::from(0), Value::from(5), Value::from(1)]
/// );
/// assert_eq!(
///     spec.resolve(&[Value::from(2), Value::from(9)]),
///     vec![Value::from(2), Value::from(9), Value::from(1)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsSpec {
    base: Vec<Value>,
    rules: Vec<ArityRule>,
}

impl ArgsSpec {
    /// Creates a spec with the given default arguments and no rules.
    pub fn new<I>(base: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            base: base.into_iter().collect(),
            rules: Vec::new(),
        }
    }

    /// Sets the rule used when a call receives exactly `arity` arguments.
    pub fn with_rule(mut self, arity: usize, rule: ArityRule) -> Self {
        if self.rules.len() <= arity {
            self.rules.resize(arity + 1, ArityRule::PassThrough);
        }
        self.rules[arity] = rule;
        self
    }

    /// Overlays `values` when a call receives exactly `arity` arguments.
    pub fn with_replacement<I>(self, arity: usize, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.with_rule(arity, ArityRule::Replace(values.into_iter().collect()))
    }

    /// Overlays the output of `f` when a call receives exactly `arity`
    /// arguments.
    pub fn with_transform<F>(self, arity: usize, f: F) -> Self
    where
        F: Fn(&[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        self.with_rule(arity, ArityRule::transform(f))
    }

    /// The default arguments.
    pub fn base(&self) -> &[Value] {
        &self.base
    }

    /// The rule for `arity`, if one was set.
    pub fn rule(&self, arity: usize) -> Option<&ArityRule> {
        self.rules.get(arity)
    }

    /// Normalizes one call's arguments.
    ///
    /// Each call starts from a fresh copy of the defaults, so earlier calls
    /// never leak into later ones.
    pub fn resolve(&self, args: &[Value]) -> Vec<Value> {
        let replacement = match self.rule(args.len()) {
            Some(rule) => rule.apply(args),
            None => Cow::Borrowed(args),
        };

        let mut merged = self.base.clone();
        def_assign(&mut merged, &replacement);

        tracing::trace!(
            arity = args.len(),
            resolved = merged.len(),
            "Resolved indefinite arguments"
        );
        merged
    }

    /// Wraps the spec in a dynamic [`Function`] returning the resolved
    /// arguments as a sequence.
    pub fn into_function(self) -> Function {
        Function::from_fn(move |args| Value::Array(self.resolve(args)))
    }
}

/// Builds an argument normalizer from `spec`.
///
/// Shorthand for calling [`ArgsSpec::resolve`] through a closure.
pub fn indefinite_args(spec: ArgsSpec) -> impl Fn(&[Value]) -> Vec<Value> + Send + Sync {
    move |args: &[Value]| spec.resolve(args)
}
