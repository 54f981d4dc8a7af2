use httpmux::{Method, Mux, testing::CountingHandler};
use std::sync::Arc;
use tokio::sync::Barrier;

mod common;
use common::{Exchange, get, reply};

const TASKS: usize = 16;
const ROUNDS: usize = 100;

fn shared_mux() -> Arc<Mux<Exchange>> {
    let mut mux: Mux<Exchange> = Mux::new();
    mux.get("/users/admin", reply("admin")).unwrap();
    mux.get("/users/:id", reply("user")).unwrap();
    mux.get("/static/*rest", reply("static")).unwrap();
    mux.get("/item/#{id}^[0-9]+$", reply("item")).unwrap();
    Arc::new(mux)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups() {
    let mux = shared_mux();
    let barrier = Arc::new(Barrier::new(TASKS));

    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let mux = Arc::clone(&mux);
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                for round in 0..ROUNDS {
                    let id = task * ROUNDS + round;
                    assert_eq!(
                        get(&mux, &format!("/users/{id}")),
                        Some(format!("user id={id}"))
                    );
                    assert_eq!(get(&mux, "/users/admin").as_deref(), Some("admin"));
                    assert_eq!(
                        get(&mux, &format!("/static/{task}/app.js")),
                        Some(format!("static rest={task}/app.js"))
                    );
                    assert_eq!(get(&mux, "/item/abc"), None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_serving_shares_handlers() {
    let counter = CountingHandler::new();
    let mut mux: Mux<()> = Mux::new();
    mux.handle(Method::GET, "/hit/:n", counter.clone()).unwrap();
    let mux = Arc::new(mux);

    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let mux = Arc::clone(&mux);
            tokio::spawn(async move {
                for round in 0..ROUNDS {
                    let path = format!("/hit/{}", task * ROUNDS + round);
                    assert!(mux.serve(&Method::GET, &path, &mut ()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(counter.count(), TASKS * ROUNDS);
}
