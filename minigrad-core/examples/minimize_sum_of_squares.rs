//! Minimizes `sum(x * x)` with plain gradient descent.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use log::info;
use minigrad_core::{mul_op, sum_op, MiniGradError, Node, Optimizer, SgdOptimizer};

const ITERATIONS: usize = 100;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), MiniGradError> {
    env_logger::init();

    let x = Node::new(vec![11.0, -19.0, 7.0, -1.0, 2.0, 13.0], true)?;
    let mut optimizer = SgdOptimizer::new(vec![x.clone()], LEARNING_RATE);
    info!("starting from x = {}", x);

    for iteration in 0..ITERATIONS {
        optimizer.zero_grad();
        let loss = sum_op(&mul_op(&x, &x)?)?;
        loss.backward(None)?;
        println!("iteration {:3}: loss = {:.6e}", iteration, loss.item()?);
        optimizer.step()?;
    }

    println!("final x = {}", x);
    Ok(())
}
