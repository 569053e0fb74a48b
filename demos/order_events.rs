//! # Example: order_events
//!
//! Demonstrates the full publisher lifecycle with the built-in [`LogWriter`].
//!
//! Shows how to:
//! - Create events and subscribe named callbacks.
//! - Publish fire-and-forget, and wait on a dispatch when needed.
//! - Observe panic isolation: a crashing subscriber does not stop its siblings.
//! - Unsubscribe until the event disappears.
//!
//! ## Flow
//! ```text
//! create_event("order.created")
//!     ├─► subscribe(mailer, audit, flaky)
//!     ├─► publish(OrderCreated { 42 })          (fire-and-forget)
//!     ├─► dispatch(OrderCreated { 43 }).wait()  (completion report)
//!     └─► unsubscribe(...) until the event is gone
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example order_events --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use eventpub::{
    LogWriter, Payload, Publisher, PublisherConfig, PublisherError, SubscriberFn, SubscriberRef,
};

#[derive(Debug)]
struct OrderCreated {
    order_id: u64,
}

#[tokio::main]
async fn main() -> Result<(), PublisherError> {
    let publisher: Publisher<OrderCreated> = Publisher::builder(PublisherConfig::with_logging())
        .with_logger(Arc::new(LogWriter::new()))
        .build();

    publisher.create_event(["order.created", "order.cancelled"]).await;

    let mailer: SubscriberRef<OrderCreated> =
        SubscriberFn::arc("mailer", |p: Arc<Payload<OrderCreated>>| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            println!("[mailer] confirmation sent for order {}", p.order_id);
        });
    let audit: SubscriberRef<OrderCreated> =
        SubscriberFn::arc("audit", |p: Arc<Payload<OrderCreated>>| async move {
            println!(
                "[audit] {} at {:?}: {:?}",
                p.header().name(),
                p.header().event_time(),
                p.data
            );
        });
    let flaky: SubscriberRef<OrderCreated> =
        SubscriberFn::arc("flaky", |p: Arc<Payload<OrderCreated>>| async move {
            if p.order_id % 2 == 0 {
                panic!("flaky cannot handle even orders");
            }
        });

    publisher
        .subscribe("order.created", [mailer.clone(), audit, flaky, mailer])
        .await;
    println!(
        "subscribers of order.created: {}",
        publisher.subscribers_count("order.created").await
    );

    publisher
        .publish("order.created", OrderCreated { order_id: 42 })
        .await?;

    let report = publisher
        .dispatch("order.created", OrderCreated { order_id: 43 })
        .await?
        .wait()
        .await;
    println!("dispatch report: {report:?}");

    if let Err(e) = publisher
        .publish("order.cancelled", OrderCreated { order_id: 42 })
        .await
    {
        println!("publish failed: {} ({})", e, e.as_label());
    }

    for name in ["mailer", "audit", "flaky"] {
        publisher.unsubscribe(name, "order.created").await?;
    }
    println!("events left: {:?}", publisher.events().await);

    // give the fire-and-forget dispatch time to finish printing
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
