use crate::errors::TourResult;
use crate::pages::Page;
use crate::protocols::{AbsoluteValue, ExampleProtocol, SimpleClass, SimpleStructure};
use crate::runner::{Demonstration, PageContext};

/// Trait adoption by a class-like type, a struct and `i64`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolsPage;

impl Demonstration for ProtocolsPage {
    fn page(&self) -> Page {
        Page::ProtocolsAndExtensions
    }

    fn run(&self, ctx: &mut PageContext<'_>) -> TourResult<()> {
        let mut a = SimpleClass::default();
        a.adjust();
        a.id = 23;
        ctx.say(format!("{} (id {})", a.simple_description(), a.id()));

        let mut b = SimpleStructure::default();
        b.adjust();
        ctx.say(format!("{} (id {})", b.simple_description(), b.id()));

        let mut number: i64 = 7;
        ctx.say(7_i64.simple_description());
        number.adjust();
        ctx.say(format!("{} (id {})", number.simple_description(), number.id()));

        ctx.say(format!("{:?}", (-7.5_f64).absolute_value()));

        let protocol_value: &dyn ExampleProtocol = &a;
        ctx.say(protocol_value.simple_description());
        Ok(())
    }
}
