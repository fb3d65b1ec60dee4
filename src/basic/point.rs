/// Pixel position of a cell's top-left corner, always grid-aligned
/// for cells that are part of the simulation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
