use crate::errors::TourResult;
use crate::pages::Page;
use crate::people::{Employee, Greet, Person};
use crate::runner::{Demonstration, PageContext};
use crate::shapes::{
    Circle, Describable, EquilateralTriangle, HasArea, NamedShape, Shape, Square,
    TriangleAndSquare,
};

/// Shapes, computed properties and employees
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectsPage;

impl Demonstration for ObjectsPage {
    fn page(&self) -> Page {
        Page::ObjectsAndClasses
    }

    fn run(&self, ctx: &mut PageContext<'_>) -> TourResult<()> {
        let mut shape = Shape::new();
        shape.number_of_sides = 700;
        ctx.say(shape.simple_description());

        let named = NamedShape::new("Round");
        ctx.say(format!("{}: {}", named.name, named.simple_description()));

        let square = Square::new(5.2, "my test square");
        ctx.say(format!("{} Area {:?}", square.simple_description(), square.area()));

        let circle = Circle::new("Great Circle", 5.0);
        ctx.say(format!("{} Area {:?}", circle.simple_description(), circle.area()));

        let mut triangle = EquilateralTriangle::new(3.1, "a triangle");
        ctx.say(format!("{:?}", triangle.perimeter()));
        triangle.set_perimeter(18.0);
        ctx.say(format!("{:?}", triangle.side_length));

        let mut pair = TriangleAndSquare::new(10.0, "another test shape");
        ctx.say(format!("{:?}", pair.square().side_length));
        ctx.say(format!("{:?}", pair.triangle().side_length));
        pair.set_square(Square::new(50.0, "larger square"));
        ctx.say(format!("{:?}", pair.triangle().side_length));
        ctx.say(format!("{:?}", pair.square().side_length));

        let optional_square: Option<Square> = None;
        let side_length = optional_square.as_ref().map(|square| square.side_length);
        ctx.say(format!("optional square side length: {side_length:?}"));

        ctx.say(Person::new("Ada", 36).greet());
        let mut employee = Employee::new("Jonas", 33, "21312323");
        ctx.say(employee.greet());
        employee.set_salary(350.0);
        ctx.say(format!(
            "salary {:?}, tax {:?}",
            employee.salary(),
            employee.tax()
        ));
        Ok(())
    }
}
