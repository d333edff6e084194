//! Browser platform: `spawn_local` on the JS event loop, `setTimeout` timers

use ami_dashboard::Platform;
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::future::Future;
use std::time::Duration;

use crate::dom::BrowserDocument;
use crate::transport::GlooTransport;

#[derive(Clone)]
pub struct BrowserPlatform {
    document: BrowserDocument,
    transport: GlooTransport,
}

impl BrowserPlatform {
    pub fn new(document: BrowserDocument, transport: GlooTransport) -> Self {
        Self {
            document,
            transport,
        }
    }
}

impl Platform for BrowserPlatform {
    type Document = BrowserDocument;
    type Transport = GlooTransport;

    fn document(&self) -> &BrowserDocument {
        &self.document
    }

    fn transport(&self) -> &GlooTransport {
        &self.transport
    }

    fn spawn_local<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}
