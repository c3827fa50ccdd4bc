use crate::concurrency::launch;
use crate::errors::TourResult;
use crate::pages::Page;
use crate::runner::{Demonstration, PageContext};

/// Fire-and-forget launch of the user lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrencyPage;

impl Demonstration for ConcurrencyPage {
    fn page(&self) -> Page {
        Page::Concurrency
    }

    fn run(&self, ctx: &mut PageContext<'_>) -> TourResult<()> {
        let server = ctx.config().server.clone();
        ctx.say(format!("Connecting to {server} in the background"));
        let handle = launch(ctx.console().clone(), server)?;
        ctx.background(handle);
        Ok(())
    }
}
