// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
//! Scope frames chained to their parent.

use crate::Value;
use error::{VladError, VladErrorKind};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Environment {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: FxHashMap<SmolStr, Value>,
    parent: Option<Environment>,
}

impl Environment {
    /// Create a root frame.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: FxHashMap::default(),
                parent: None,
            })),
        }
    }

    /// Create a frame whose parent is `self`.
    pub fn child(&self) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Innermost binding of `name`, walking outward.
    pub fn search(&self, name: &str) -> Option<Value> {
        let inner = self.inner.borrow();
        if let Some(value) = inner.bindings.get(name) {
            Some(value.clone())
        } else if let Some(parent) = &inner.parent {
            parent.search(name)
        } else {
            None
        }
    }

    /// Bind `name` in this frame. Shadowing an outer binding is fine;
    /// binding the same name twice in one frame is not.
    pub fn declare(&self, name: &str, value: Value) -> Result<(), VladError> {
        let mut inner = self.inner.borrow_mut();
        if inner.bindings.contains_key(name) {
            return Err(VladError::runtime(VladErrorKind::AlreadyBound(name.to_string()))
                .with_help(format!("`{}` is already declared in this scope", name)));
        }
        inner.bindings.insert(SmolStr::new(name), value);
        Ok(())
    }

    /// Overwrite the innermost frame that binds `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), VladError> {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.bindings.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        let parent = self.inner.borrow().parent.clone();
        match parent {
            Some(parent) => parent.assign(name, value),
            None => Err(VladError::unbound(name)),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
