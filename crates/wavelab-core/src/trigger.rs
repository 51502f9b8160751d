// File: crates/wavelab-core/src/trigger.rs
// Summary: Explicit render-trigger registration (load, redraw, resize) in place of ambient event wiring.

use tracing::debug;

use crate::error::PlotResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderTrigger {
    /// Initial page/application load.
    Load,
    /// User asked for a redraw.
    Redraw,
    /// Host surface changed size.
    Resize,
}

type Handler<'a> = Box<dyn FnMut() -> PlotResult<()> + 'a>;

struct Binding<'a> {
    trigger: RenderTrigger,
    name: String,
    handler: Handler<'a>,
}

/// Ordered list of (trigger, handler) bindings.
///
/// Handlers run synchronously and to completion, in registration order.
/// Each handler owns whatever configuration it renders from.
#[derive(Default)]
pub struct TriggerDispatcher<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> TriggerDispatcher<'a> {
    pub fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    pub fn on(&mut self, trigger: RenderTrigger, name: impl Into<String>, handler: impl FnMut() -> PlotResult<()> + 'a) -> &mut Self {
        self.bindings.push(Binding { trigger, name: name.into(), handler: Box::new(handler) });
        self
    }

    /// Number of handlers bound to `trigger`.
    pub fn bound(&self, trigger: RenderTrigger) -> usize {
        self.bindings.iter().filter(|b| b.trigger == trigger).count()
    }

    /// Run every handler bound to `trigger`. Stops at the first error.
    /// Returns how many handlers ran.
    pub fn fire(&mut self, trigger: RenderTrigger) -> PlotResult<usize> {
        let mut ran = 0usize;
        for b in self.bindings.iter_mut().filter(|b| b.trigger == trigger) {
            debug!(?trigger, handler = %b.name, "dispatch");
            (b.handler)()?;
            ran += 1;
        }
        Ok(ran)
    }
}
