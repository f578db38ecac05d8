use std::{fmt, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, print},
        },
        value::{
            core::{Closure, Value},
            environment::{Env, Environment},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluator, for access to the output channel, and a
/// slice of evaluated argument values.
pub type BuiltinFn = fn(&mut Evaluator, &[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` leaves argument checking to the builtin itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the metadata a builtin value points at),
/// - `BUILTIN_TABLE` (static table installed into every global scope),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A native function: its global name, accepted argument count and
        /// implementation.
        pub struct BuiltinDef {
            pub name:  &'static str,
            pub arity: Arity,
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in installation order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::Any,      func: print::print },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "type"  => { arity: Arity::Exact(1), func: builtin::type_of },
    "push"  => { arity: Arity::Any,      func: builtin::push },
    "pop"   => { arity: Arity::Exact(1), func: builtin::pop },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `Err` with an arity mismatch if it does not.
    fn check(self, found: usize) -> EvalResult<()> {
        match self {
            Self::Exact(expected) if expected != found => {
                Err(RuntimeError::ArityMismatch { expected, found })
            },
            _ => Ok(()),
        }
    }
}

/// Returns the bindings that seed a new global scope: every builtin under
/// its own name.
pub(crate) fn builtin_bindings() -> impl Iterator<Item = (String, Value)> {
    BUILTIN_TABLE.iter()
                 .map(|def| (def.name.to_string(), Value::Builtin(def)))
}

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right,
    /// then the call is made with [`Evaluator::call_value`].
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            env: &Env)
                            -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument, env))
                            .collect::<EvalResult<Vec<_>>>()?;
        self.call_value(&callee, args)
    }

    /// Calls a function value with already evaluated arguments.
    ///
    /// # Parameters
    /// - `callee`: The value being called.
    /// - `args`: Evaluated argument values.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - A type error if `callee` is not callable.
    /// - [`RuntimeError::ArityMismatch`] on a wrong argument count.
    /// - Anything the function body raises.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Builtin(def) => {
                def.arity.check(args.len())?;
                (def.func)(self, &args)
            },
            Value::Function(closure) => self.call_closure(closure, args),
            other => Err(RuntimeError::type_error(format!("{} is not a function",
                                                          other.type_name()))),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The argument count must match the parameter count exactly. Parameters
    /// are bound in a new scope whose parent is the scope the function was
    /// defined in, not the caller's, and the body block runs beneath it. A
    /// `return` in the body yields its payload; otherwise the call yields the
    /// value of the last statement.
    fn call_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult<Value> {
        let params = &closure.def.params;
        if args.len() != params.len() {
            return Err(RuntimeError::ArityMismatch { expected: params.len(),
                                                     found:    args.len(), });
        }

        tracing::trace!(params = params.len(), "calling function");
        let scope = Environment::child(&closure.env);
        for (param, arg) in params.iter().zip(args) {
            scope.define(param, arg, false)?;
        }

        Ok(self.eval_block(&closure.def.body, &scope)?.into_value())
    }

    /// Creates a closure over `env` for a function definition.
    pub(crate) fn make_closure(def: &Rc<FunctionDef>, env: &Env) -> Value {
        Value::Function(Rc::new(Closure { def: Rc::clone(def),
                                          env: Rc::clone(env), }))
    }
}
