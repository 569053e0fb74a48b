use std::sync::Arc;

use eventpub::{Payload, Publisher, PublisherConfig, SubscriberFn, SubscriberRef, TracingLogger};
use tracing_subscriber::EnvFilter;

#[tokio::test]
async fn tracing_logger_drives_a_full_dispatch() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("eventpub=info"))
        .with_test_writer()
        .try_init();

    let publisher: Publisher<&'static str> = Publisher::builder(PublisherConfig::with_logging())
        .with_logger(Arc::new(TracingLogger))
        .build();

    let echo: SubscriberRef<&'static str> =
        SubscriberFn::arc("echo", |p: Arc<Payload<&'static str>>| async move {
            assert_eq!(p.header().name(), "greet");
            assert_eq!(p.data, "hello");
        });
    publisher.subscribe("greet", [echo]).await;

    let report = publisher
        .dispatch("greet", "hello")
        .await
        .unwrap()
        .wait()
        .await;
    assert!(report.all_completed());

    publisher.unsubscribe("echo", "greet").await.unwrap();
    assert!(publisher.events().await.is_empty());
}
