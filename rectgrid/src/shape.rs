/// Measurements shared by every closed shape the grid can hold.
pub trait Shape {
    fn perimeter(&self) -> i64;
    fn area(&self) -> i64;
}
