//! Feature annotation utility.
//!
//! Marks functions, constructors, or dynamic callables as unfinished or
//! unstable. Every invocation of an annotated target emits a non-fatal
//! `[LABEL] <name>: <message>` warning before delegating to the original
//! target unchanged. Annotation is explicit wrapper composition: the
//! original target is never mutated.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::error::{Error, Result};

/// Factory for feature annotations sharing one label and default message.
#[derive(Debug)]
pub struct FeatureDecorator {
    label: &'static str,
    default_message: &'static str,
}

/// Marks a feature as a work in progress.
pub static WORK_IN_PROGRESS: FeatureDecorator = FeatureDecorator::new(
    "WIP",
    "This feature is a work in progress and may be incomplete or unstable.",
);

/// Marks a feature as experimental.
pub static EXPERIMENTAL: FeatureDecorator = FeatureDecorator::new(
    "EXPERIMENTAL",
    "This feature is experimental and may change or be removed in future \
     versions without notice. It may introduce breaking changes at any time.",
);

/// A dynamic callable taking and returning JSON values, mirroring the
/// argument convention of [`crate::traits::Tool`].
pub type DynCallable = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Dynamic annotation target for [`FeatureDecorator::apply`].
pub enum FeatureTarget {
    /// A function or method.
    Callable(DynCallable),
    /// A factory that constructs a value.
    Constructor(DynCallable),
    /// A plain value. Not annotatable.
    Value(Value),
}

impl std::fmt::Debug for FeatureTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Constructor(_) => f.write_str("Constructor(..)"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

impl FeatureDecorator {
    /// Create a decorator with a fixed label and default message.
    pub const fn new(label: &'static str, default_message: &'static str) -> Self {
        Self {
            label,
            default_message,
        }
    }

    /// The annotation label, e.g. "WIP".
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Format the warning for a target, falling back to the default message.
    pub fn warn_message(&self, target_name: &str, message: Option<&str>) -> String {
        format!(
            "[{}] {}: {}",
            self.label,
            target_name,
            message.unwrap_or(self.default_message)
        )
    }

    /// Wrap a callable so every call warns before delegating.
    pub fn wrap_fn<F>(&self, target_name: &str, message: Option<&str>, inner: F) -> Flagged<F> {
        Flagged {
            warn_msg: self.warn_message(target_name, message),
            inner,
            emitted: AtomicU64::new(0),
        }
    }

    /// Wrap a constructor so every construction warns before building.
    pub fn wrap_ctor<F>(&self, target_name: &str, message: Option<&str>, inner: F) -> Flagged<F> {
        self.wrap_fn(target_name, message, inner)
    }

    /// Annotate a dynamic target.
    ///
    /// Callables and constructors come back wrapped; a plain value fails
    /// immediately with [`Error::TypeIncompatible`]. The failure happens at
    /// annotation time, not when the target is later used.
    pub fn apply(
        &self,
        target_name: &str,
        message: Option<&str>,
        target: FeatureTarget,
    ) -> Result<FeatureTarget> {
        match target {
            FeatureTarget::Callable(inner) => {
                let flagged = self.wrap_fn(target_name, message, inner);
                Ok(FeatureTarget::Callable(Box::new(move |args| {
                    flagged.call(args)
                })))
            }
            FeatureTarget::Constructor(inner) => {
                let flagged = self.wrap_ctor(target_name, message, inner);
                Ok(FeatureTarget::Constructor(Box::new(move |args| {
                    flagged.construct(args)
                })))
            }
            FeatureTarget::Value(value) => Err(Error::type_incompatible(format!(
                "@{} can only be applied to callables or constructors, not {}",
                self.label,
                json_kind(&value)
            ))),
        }
    }
}

/// An annotated callable or constructor.
pub struct Flagged<F> {
    warn_msg: String,
    inner: F,
    emitted: AtomicU64,
}

impl<F> Flagged<F> {
    /// Invoke the wrapped callable, warning first.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        tracing::warn!("{}", self.warn_msg);
        self.emitted.fetch_add(1, Ordering::Relaxed);
        (self.inner)(args)
    }

    /// Build a value through the wrapped constructor, warning first.
    pub fn construct<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.call(args)
    }

    /// The formatted warning this wrapper emits.
    pub fn warn_message(&self) -> &str {
        &self.warn_msg
    }

    /// How many warnings have been emitted so far.
    pub fn warnings_emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "a null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
