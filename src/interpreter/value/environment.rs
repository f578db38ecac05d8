use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A shared handle to a scope.
pub type Env = Rc<Environment>;

/// A single lexical scope.
///
/// Scopes form a tree through their `parent` links. Every block, loop body
/// and function call gets a fresh child; closures hold an [`Env`] to the scope
/// they were created in, which keeps that scope alive after control leaves it.
///
/// Interior mutability lets a scope be updated through a shared handle.
#[derive(Debug, Default)]
pub struct Environment {
    values:    RefCell<HashMap<String, Value>>,
    constants: RefCell<HashSet<String>>,
    parent:    Option<Env>,
}

impl Environment {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn global() -> Env {
        Rc::new(Self::default())
    }

    /// Creates a root scope pre-populated with `bindings`.
    ///
    /// Used to install the builtin library into a fresh global scope.
    #[must_use]
    pub fn global_with(bindings: impl IntoIterator<Item = (String, Value)>) -> Env {
        Rc::new(Self { values: RefCell::new(bindings.into_iter().collect()),
                       ..Self::default() })
    }

    /// Creates a new scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &Env) -> Env {
        tracing::trace!("entering child scope");
        Rc::new(Self { parent: Some(Rc::clone(parent)),
                       ..Self::default() })
    }

    /// Binds `name` in this scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DuplicateDefinition`] if `name` is already
    /// bound in this very scope. Bindings in enclosing scopes are shadowed.
    ///
    /// # Example
    /// ```
    /// use mylang::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::global();
    /// global.define("x", Value::Number(1.0), false).unwrap();
    /// assert!(global.define("x", Value::Null, false).is_err());
    ///
    /// let inner = Environment::child(&global);
    /// inner.define("x", Value::Number(2.0), false).unwrap();
    /// assert_eq!(inner.get("x").unwrap(), Value::Number(2.0));
    /// assert_eq!(global.get("x").unwrap(), Value::Number(1.0));
    /// ```
    pub fn define(&self, name: &str, value: Value, constant: bool) -> EvalResult<()> {
        let mut values = self.values.borrow_mut();
        if values.contains_key(name) {
            return Err(RuntimeError::DuplicateDefinition { name: name.to_string() });
        }
        values.insert(name.to_string(), value);
        if constant {
            self.constants.borrow_mut().insert(name.to_string());
        }
        Ok(())
    }

    /// Looks `name` up in this scope and then in each enclosing scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no scope binds `name`.
    pub fn get(&self, name: &str) -> EvalResult<Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.values.borrow().get(name) {
                return Ok(value.clone());
            }
            match &scope.parent {
                Some(parent) => scope = parent,
                None => return Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
            }
        }
    }

    /// Replaces the value of `name` in the nearest scope that binds it.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// - [`RuntimeError::ConstReassignment`] if the owning scope declared
    ///   `name` as a constant.
    /// - [`RuntimeError::UndefinedVariable`] if no scope binds `name`.
    pub fn assign(&self, name: &str, value: Value) -> EvalResult<()> {
        let mut scope = self;
        loop {
            if let Some(slot) = scope.values.borrow_mut().get_mut(name) {
                if scope.constants.borrow().contains(name) {
                    return Err(RuntimeError::ConstReassignment { name: name.to_string() });
                }
                *slot = value;
                return Ok(());
            }
            match &scope.parent {
                Some(parent) => scope = parent,
                None => return Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
            }
        }
    }

    /// Returns `true` if `name` is bound in this scope itself.
    #[must_use]
    pub fn has_own(&self, name: &str) -> bool {
        self.values.borrow().contains_key(name)
    }

    /// Releases a scope that control is leaving.
    ///
    /// A function bound in the scope it closes over holds that scope through
    /// its `env`, and the scope holds the function, so neither is ever freed.
    /// When the caller's handle and those functions are the only owners of
    /// `scope`, and nothing outside the scope holds the functions, the
    /// bindings are dropped. Otherwise the scope is still reachable and is
    /// left alone.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use mylang::{
    ///     ast::{Block, FunctionDef},
    ///     interpreter::value::{
    ///         core::{Closure, Value},
    ///         environment::Environment,
    ///     },
    /// };
    ///
    /// let scope = Environment::child(&Environment::global());
    /// let def = Rc::new(FunctionDef { params: vec![],
    ///                                 body:   Block::default(), });
    /// let closure = Closure { def,
    ///                         env: Rc::clone(&scope) };
    /// scope.define("g", Value::Function(Rc::new(closure)), false).unwrap();
    ///
    /// let weak = Rc::downgrade(&scope);
    /// Environment::release(&scope);
    /// drop(scope);
    /// assert!(weak.upgrade().is_none());
    /// ```
    pub fn release(scope: &Env) {
        let mut captured = 0;
        for value in scope.values.borrow().values() {
            if let Value::Function(closure) = value
               && Rc::ptr_eq(&closure.env, scope)
            {
                if Rc::strong_count(closure) > 1 {
                    return;
                }
                captured += 1;
            }
        }

        if captured > 0 && Rc::strong_count(scope) == captured + 1 {
            tracing::trace!(captured, "releasing self-referencing scope");
            scope.clear();
        }
    }

    /// Drops every binding of this scope.
    ///
    /// A function stored in the scope it closes over forms an `Rc` cycle with
    /// that scope; clearing the bindings breaks the cycle.
    pub fn clear(&self) {
        let values = std::mem::take(&mut *self.values.borrow_mut());
        self.constants.borrow_mut().clear();
        drop(values);
    }
}
