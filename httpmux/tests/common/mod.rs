#![allow(dead_code)]

use httpmux::{Context, Handler, Method, Mux, Next};

// ============================================================================
// Test Request Type
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct Exchange {
    pub status: u16,
    pub body: String,
    pub trail: Vec<String>,
}

impl Exchange {
    pub fn new() -> Self {
        Self {
            status: 404,
            ..Self::default()
        }
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Replies with `label`, followed by every captured `name=value` pair.
pub struct Reply {
    pub label: &'static str,
}

impl Handler<Exchange> for Reply {
    fn serve(&self, req: &mut Exchange, ctx: &mut Context, _next: &mut Next<'_, Exchange>) {
        req.status = 200;
        req.body = self.label.to_string();
        for (name, value) in ctx.iter() {
            req.body.push_str(&format!(" {name}={value}"));
        }
        req.trail.push(self.label.to_string());
    }
}

pub fn reply(label: &'static str) -> Reply {
    Reply { label }
}

/// Appends `label` to the trail and continues.
pub struct Step {
    pub label: &'static str,
}

impl Handler<Exchange> for Step {
    fn serve(&self, req: &mut Exchange, ctx: &mut Context, next: &mut Next<'_, Exchange>) {
        req.trail.push(self.label.to_string());
        next.run(req, ctx);
    }
}

/// Rejects the request with 401 unless the `token` parameter equals `secret`.
pub struct Guard {
    pub secret: &'static str,
}

impl Handler<Exchange> for Guard {
    fn serve(&self, req: &mut Exchange, ctx: &mut Context, next: &mut Next<'_, Exchange>) {
        if ctx.value_by_name("token") == self.secret {
            next.run(req, ctx);
        } else {
            req.status = 401;
            req.trail.push("denied".to_string());
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Serve `path` and return the resulting exchange.
pub fn dispatch(mux: &Mux<Exchange>, method: Method, path: &str) -> Exchange {
    let mut exchange = Exchange::new();
    mux.serve(&method, path, &mut exchange);
    exchange
}

/// Serve a `GET` for `path` and return the body, or `None` on a miss.
pub fn get(mux: &Mux<Exchange>, path: &str) -> Option<String> {
    let mut exchange = Exchange::new();
    mux.serve(&Method::GET, path, &mut exchange)
        .then_some(exchange.body)
}
