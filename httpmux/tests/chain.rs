use httpmux::{
    Chain, ChainState, Context, Handler, Method, Mux, Next, handler_fn,
    middleware::LoggingMiddleware,
    testing::{CountingHandler, Recorder},
};

mod common;
use common::{Exchange, Guard, Step, dispatch, reply};

#[test]
fn test_middleware_runs_in_order() {
    let mut mux: Mux<Exchange> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/x",
        Chain::new()
            .append(Step { label: "m1" })
            .append(Step { label: "m2" })
            .handler(reply("t")),
    )
    .unwrap();

    let exchange = dispatch(&mux, Method::GET, "/x");
    assert_eq!(exchange.trail, vec!["m1", "m2", "t"]);
    assert_eq!(exchange.status, 200);
}

#[test]
fn test_prepended_middleware_runs_first() {
    let mut mux: Mux<Exchange> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/x",
        Chain::new()
            .append(Step { label: "inner" })
            .prepend(Step { label: "outer" })
            .handler(reply("t")),
    )
    .unwrap();

    let exchange = dispatch(&mux, Method::GET, "/x");
    assert_eq!(exchange.trail, vec!["outer", "inner", "t"]);
}

#[test]
fn test_middleware_can_stop_the_chain() {
    let mut mux: Mux<Exchange> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/secure/:token",
        Chain::new()
            .append(Guard { secret: "open-sesame" })
            .append(Step { label: "audit" })
            .handler(reply("vault")),
    )
    .unwrap();

    let denied = dispatch(&mux, Method::GET, "/secure/guess");
    assert_eq!(denied.status, 401);
    assert_eq!(denied.trail, vec!["denied"]);

    let allowed = dispatch(&mux, Method::GET, "/secure/open-sesame");
    assert_eq!(allowed.status, 200);
    assert_eq!(allowed.trail, vec!["audit", "vault"]);
}

#[test]
fn test_chain_state_resets_per_request() {
    let middleware = CountingHandler::passing();
    let terminal = CountingHandler::new();
    let mut mux: Mux<()> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/count",
        Chain::new()
            .append(middleware.clone())
            .handler(terminal.clone()),
    )
    .unwrap();

    for _ in 0..3 {
        assert!(mux.serve(&Method::GET, "/count", &mut ()));
    }
    assert_eq!(middleware.count(), 3);
    assert_eq!(terminal.count(), 3);
}

#[test]
fn test_repeated_continue_runs_each_step_once() {
    let recorder = Recorder::new();
    let twice = handler_fn(|req: &mut (), ctx: &mut Context, next: &mut Next<'_, ()>| {
        next.run(req, ctx);
        next.run(req, ctx);
        assert_eq!(next.state(), ChainState::Exhausted);
    });

    let mut mux: Mux<()> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/twice",
        Chain::new()
            .append(twice)
            .append(recorder.middleware("m"))
            .handler(recorder.terminal("t")),
    )
    .unwrap();

    mux.serve(&Method::GET, "/twice", &mut ());
    assert_eq!(recorder.entries(), vec!["m", "t"]);
}

#[test]
fn test_handler_reads_params_and_sets_vars() {
    struct Lookup;

    impl Handler<Exchange> for Lookup {
        fn serve(&self, req: &mut Exchange, ctx: &mut Context, _next: &mut Next<'_, Exchange>) {
            let user = ctx.value_by_name("user").to_uppercase();
            req.body = user.clone();
            ctx.set_var("user", user);
        }
    }

    let mut mux: Mux<Exchange> = Mux::new();
    mux.get("/profile/:user", Lookup).unwrap();

    let mut exchange = Exchange::new();
    let ctx = mux
        .lookup(&Method::GET, "/profile/ada")
        .unwrap()
        .serve(&mut exchange);
    assert_eq!(exchange.body, "ADA");
    assert_eq!(ctx.var("user"), Some("ADA"));
    assert_eq!(ctx.value_by_name("user"), "ada");
}

#[test]
fn test_logging_middleware_is_transparent() {
    let recorder = Recorder::new();
    let mut mux: Mux<()> = Mux::new();
    mux.handle_chain(
        Method::GET,
        "/logged/:id",
        Chain::new()
            .append(LoggingMiddleware::named("api"))
            .append(recorder.middleware("m"))
            .handler(recorder.terminal("t")),
    )
    .unwrap();

    assert!(mux.serve(&Method::GET, "/logged/1", &mut ()));
    assert_eq!(recorder.entries(), vec!["m", "t"]);
}

#[test]
fn test_shared_middleware_across_routes() {
    let counter = CountingHandler::passing();
    let recorder = Recorder::new();
    let mut mux: Mux<()> = Mux::new();
    for (path, label) in [("/a", "a"), ("/b", "b")] {
        mux.handle_chain(
            Method::GET,
            path,
            Chain::new()
                .append(counter.clone())
                .handler(recorder.terminal(label)),
        )
        .unwrap();
    }

    mux.serve(&Method::GET, "/a", &mut ());
    mux.serve(&Method::GET, "/b", &mut ());
    assert_eq!(counter.count(), 2);
    assert_eq!(recorder.entries(), vec!["a", "b"]);
}
