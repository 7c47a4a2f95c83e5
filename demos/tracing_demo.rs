//! Shows the debug events emitted when a combinator rejects its argument
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::any::Any;

use predica::prelude::*;
use predica::try_instance_of;

struct Circle;
struct Square;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let evens = (0_u32..20).filter(|n| n % 2 == 0);
    match try_is_empty(evens) {
        Ok(empty) => tracing::info!("filtered range empty: {}", empty),
        Err(e) => tracing::warn!("cardinality check failed: {}", e),
    }

    match try_instance_of(TypeDescriptor::named("Shape")) {
        Ok(_) => tracing::info!("descriptor accepted"),
        Err(e) => tracing::warn!("descriptor rejected: {}", e),
    }

    let shape = TypeDescriptor::named("Shape")
        .with_member::<Circle>()
        .with_member::<Square>();
    match try_instance_of(shape) {
        Ok(is_shape) => {
            let items: Vec<Box<dyn Any>> = vec![Box::new(Circle), Box::new(Square)];
            tracing::info!("all shapes: {}", all_match(is_shape).check(&items));
        }
        Err(e) => tracing::error!("unexpected rejection: {}", e),
    }
}
