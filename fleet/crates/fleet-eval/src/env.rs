//! Nested environments.
//!
//! An environment frame maps names to shared values and optionally links to
//! a parent frame. Lookup walks child-to-root; definition only ever touches
//! the current frame, and a name can be bound at most once per frame (a
//! child may still shadow a parent freely). Frames are append-only, which
//! is what makes it safe for closures to capture their defining frame by
//! shared reference.

use std::cell::RefCell;
use std::rc::Rc;

use fleet_util::TypeError;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// One frame of the environment tree.
pub struct Environment {
    bindings: RefCell<FxHashMap<String, Rc<Value>>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates an empty frame with no parent.
    pub fn root() -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(FxHashMap::default()),
            parent: None,
        })
    }

    /// Creates an empty frame whose lookups fall through to `parent`.
    pub fn child(parent: &Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(FxHashMap::default()),
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Binds `name` in this frame.
    ///
    /// Fails with [`TypeError::AlreadyDefined`] if this frame already binds
    /// the name; the existing binding is left untouched.
    pub fn define(&self, name: &str, value: Rc<Value>) -> Result<(), TypeError> {
        let mut bindings = self.bindings.borrow_mut();
        if bindings.contains_key(name) {
            return Err(TypeError::AlreadyDefined(name.to_string()));
        }
        bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Resolves `name` against this frame, then its ancestors.
    ///
    /// Fails with [`TypeError::Undefined`] when no frame on the path to the
    /// root binds the name.
    pub fn lookup(&self, name: &str) -> Result<Rc<Value>, TypeError> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Ok(Rc::clone(value));
        }
        match &self.parent {
            Some(parent) => parent.lookup(name),
            None => Err(TypeError::Undefined(name.to_string())),
        }
    }

    /// Returns the parent frame, if any.
    pub fn parent(&self) -> Option<&Rc<Environment>> {
        self.parent.as_ref()
    }
}
