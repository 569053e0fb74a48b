use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use eventpub::{
    Logger, Payload, Publisher, PublisherConfig, Subscriber, SubscriberFn, SubscriberRef,
};
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderCreated {
    order_id: u64,
}

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl Recorder {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Logger for Recorder {
    fn log_info(&self, msg: &str) {
        self.0.lock().unwrap().push(format!("INFO {msg}"));
    }
    fn log_err(&self, msg: &str) {
        self.0.lock().unwrap().push(format!("ERR {msg}"));
    }
}

fn counting<T: Send + Sync + 'static>(name: &'static str, hits: &Arc<AtomicUsize>) -> SubscriberRef<T> {
    let hits = Arc::clone(hits);
    SubscriberFn::arc(name, move |_p: Arc<Payload<T>>| {
        let hits = Arc::clone(&hits);
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    })
}

struct Exploding(&'static str);

#[async_trait]
impl<T: Send + Sync + 'static> Subscriber<T> for Exploding {
    fn name(&self) -> &str {
        self.0
    }

    async fn on_event(&self, _payload: Arc<Payload<T>>) {
        panic!("subscriber exploded");
    }
}

fn panicking<T: Send + Sync + 'static>(name: &'static str) -> SubscriberRef<T> {
    Arc::new(Exploding(name))
}

#[tokio::test]
async fn order_created_reaches_every_subscriber_once() {
    let publisher: Publisher<OrderCreated> = Publisher::new();
    publisher.create_event(["order.created"]).await;

    let (tx, mut rx) = mpsc::unbounded_channel::<(&'static str, String, SystemTime, u64)>();
    let make = |name: &'static str| -> SubscriberRef<OrderCreated> {
        let tx = tx.clone();
        SubscriberFn::arc(name, move |p: Arc<Payload<OrderCreated>>| {
            let tx = tx.clone();
            async move {
                let h = p.header();
                let _ = tx.send((name, h.name().to_string(), h.event_time(), p.data.order_id));
            }
        })
    };
    publisher.subscribe("order.created", [make("A"), make("B")]).await;
    drop(tx);

    let before = SystemTime::now();
    publisher
        .publish("order.created", OrderCreated { order_id: 42 })
        .await
        .unwrap();

    let mut seen = Vec::new();
    for _ in 0..2 {
        let msg = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        seen.push(msg.expect("subscribers hold senders"));
    }
    let after = SystemTime::now();
    assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());

    seen.sort_by_key(|(name, ..)| *name);
    assert_eq!(seen.len(), 2, "each subscriber exactly once: {seen:?}");
    assert_eq!(seen[0].0, "A");
    assert_eq!(seen[1].0, "B");
    for (_, event, at, order_id) in &seen {
        assert_eq!(event, "order.created");
        assert!(*at >= before && *at <= after);
        assert_eq!(*order_id, 42);
    }
    // one snapshot time shared by the whole dispatch
    assert_eq!(seen[0].2, seen[1].2);
}

#[tokio::test]
async fn panicking_subscriber_is_isolated() {
    let publisher: Publisher<u32> = Publisher::new();
    let hits = Arc::new(AtomicUsize::new(0));
    publisher
        .subscribe("e", [panicking("boom"), counting("ok", &hits)])
        .await;

    let dispatch = publisher.dispatch("e", 1u32).await.unwrap();
    assert_eq!(dispatch.len(), 2);
    let report = dispatch.wait().await;

    assert_eq!(report.completed, 1);
    assert_eq!(report.panicked, vec!["boom".to_string()]);
    assert!(!report.all_completed());
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // the publisher keeps working after a subscriber crash
    assert_eq!(publisher.publish("e", 2u32).await, Ok(()));
    assert_eq!(publisher.subscribers_count("e").await, 2);
}

#[tokio::test]
async fn dispatch_logs_lifecycle_and_skips_done_after_panic() {
    let rec = Arc::new(Recorder::default());
    let publisher: Publisher<u32> = Publisher::builder(PublisherConfig::with_logging())
        .with_logger(rec.clone())
        .build();
    let hits = Arc::new(AtomicUsize::new(0));
    publisher
        .subscribe("e", [counting("good", &hits), panicking("bad")])
        .await;

    publisher.dispatch("e", 0u32).await.unwrap().wait().await;

    let lines = rec.lines();
    assert!(lines.contains(&"INFO Subscriber: good subscribed to Event: e".to_string()));
    assert!(lines.contains(&"INFO Executing subscriber: good. Event: e".to_string()));
    assert!(lines.contains(&"INFO Done executing subscriber good. Event: e".to_string()));
    assert!(lines.contains(&"INFO Executing subscriber: bad. Event: e".to_string()));
    assert!(lines.contains(
        &"ERR Subscriber: bad processing failed for Event: e: subscriber exploded".to_string()
    ));
    assert!(!lines.iter().any(|l| l.starts_with("INFO Done executing subscriber bad")));
}

#[tokio::test]
async fn publish_does_not_wait_for_subscribers() {
    let publisher: Publisher<()> = Publisher::new();
    let (release_tx, release_rx) = oneshot::channel::<()>();
    let release_rx = Arc::new(tokio::sync::Mutex::new(Some(release_rx)));
    let (done_tx, done_rx) = oneshot::channel::<()>();
    let done_tx = Arc::new(Mutex::new(Some(done_tx)));

    let blocked: SubscriberRef<()> = SubscriberFn::arc("blocked", move |_p: Arc<Payload<()>>| {
        let release_rx = Arc::clone(&release_rx);
        let done_tx = Arc::clone(&done_tx);
        async move {
            if let Some(rx) = release_rx.lock().await.take() {
                let _ = rx.await;
            }
            if let Some(tx) = done_tx.lock().unwrap().take() {
                let _ = tx.send(());
            }
        }
    });
    publisher.subscribe("e", [blocked]).await;

    // returns while the subscriber is still parked
    timeout(Duration::from_secs(1), publisher.publish("e", ()))
        .await
        .expect("publish must not block")
        .unwrap();

    // registry stays usable while the subscriber runs
    assert_eq!(publisher.subscribers_count("e").await, 1);

    release_tx.send(()).unwrap();
    timeout(Duration::from_secs(5), done_rx).await.unwrap().unwrap();
}

#[tokio::test]
async fn snapshot_survives_later_unsubscribe() {
    let publisher: Publisher<()> = Publisher::new();
    let hits = Arc::new(AtomicUsize::new(0));
    publisher
        .subscribe("e", [counting("a", &hits), counting("b", &hits)])
        .await;

    let dispatch = publisher.dispatch("e", ()).await.unwrap();
    publisher.unsubscribe("a", "e").await.unwrap();
    publisher.unsubscribe("b", "e").await.unwrap();
    assert!(!publisher.event_exist("e").await);

    let report = dispatch.wait().await;
    assert_eq!(report.event, "e");
    assert_eq!(report.completed, 2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_publish_and_unsubscribe_stress() {
    const SUBS: usize = 64;
    const PUBLISHERS: usize = 8;
    const ROUNDS: usize = 50;

    let publisher: Arc<Publisher<usize>> = Arc::new(Publisher::new());
    let keeper_hits = Arc::new(AtomicUsize::new(0));
    let churn_hits = Arc::new(AtomicUsize::new(0));

    publisher.create_event(["stress"]).await;
    publisher.subscribe("stress", [counting("keeper", &keeper_hits)]).await;
    let names: Vec<&'static str> = (0..SUBS)
        .map(|i| &*Box::leak(format!("churn-{i}").into_boxed_str()))
        .collect();
    publisher
        .subscribe(
            "stress",
            names.iter().copied().map(|n| counting::<usize>(n, &churn_hits)),
        )
        .await;
    assert_eq!(publisher.subscribers_count("stress").await, SUBS + 1);

    let run = async {
        let mut handles = Vec::new();

        for p in 0..PUBLISHERS {
            let publisher = Arc::clone(&publisher);
            handles.push(tokio::spawn(async move {
                for r in 0..ROUNDS {
                    let report = publisher
                        .dispatch("stress", p * ROUNDS + r)
                        .await
                        .expect("keeper keeps the event alive")
                        .wait()
                        .await;
                    assert!(report.all_completed());
                    assert!(report.completed >= 1);
                }
            }));
        }

        for name in names.iter().copied() {
            let publisher = Arc::clone(&publisher);
            handles.push(tokio::spawn(async move {
                publisher.unsubscribe(name, "stress").await.unwrap();
                // a second removal must report the subscriber as gone
                assert!(publisher.unsubscribe(name, "stress").await.is_err());
            }));
        }

        for h in handles {
            h.await.unwrap();
        }
    };
    timeout(Duration::from_secs(30), run)
        .await
        .expect("no deadlock under concurrent publish/unsubscribe");

    assert_eq!(publisher.subscribers_count("stress").await, 1);
    assert_eq!(keeper_hits.load(Ordering::SeqCst), PUBLISHERS * ROUNDS);
    assert!(churn_hits.load(Ordering::SeqCst) <= SUBS * PUBLISHERS * ROUNDS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_subscribe_churn_keeps_queue_consistent() {
    let publisher: Arc<Publisher<()>> = Arc::new(Publisher::new());
    let hits = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for i in 0..32usize {
        let publisher = Arc::clone(&publisher);
        let hits = Arc::clone(&hits);
        handles.push(tokio::spawn(async move {
            let name: &'static str = Box::leak(format!("sub-{i}").into_boxed_str());
            // the second registration of the same identity is a no-op
            publisher.subscribe("churn", [counting(name, &hits)]).await;
            publisher.subscribe("churn", [counting(name, &hits)]).await;
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(publisher.subscribers_count("churn").await, 32);

    let report = publisher.dispatch("churn", ()).await.unwrap().wait().await;
    assert_eq!(report.completed, 32);
    assert_eq!(hits.load(Ordering::SeqCst), 32);
}
