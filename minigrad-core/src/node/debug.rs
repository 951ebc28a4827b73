// src/node/debug.rs
use crate::node::Node;
use std::fmt;

// Human-readable form: data and requires_grad only
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(f, "Node({}, requires_grad={})", guard.data, guard.requires_grad),
            Err(_) => write!(f, "Node(<borrowed>)"),
        }
    }
}

// Manual implementation of Debug trait
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                write!(
                    f,
                    "Node(shape={:?}, requires_grad={}, has_grad={}, edges={})",
                    guard.shape(),
                    guard.requires_grad,
                    guard.grad.is_some(),
                    guard.edges.len()
                )
            }
            Err(_) => write!(f, "Node(<borrowed>)"),
        }
    }
}
