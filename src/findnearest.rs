use crate::world::*;

pub trait FindNearestItertools: Iterator {
    /// Nearest item under `range`. Ties go to the item seen first.
    fn find_nearest_by<F, V>(self, other_pos: Position, range: F) -> Option<V>
    where
        Self: Iterator<Item = V> + Sized,
        V: HasPosition,
        F: Fn(Position, Position) -> u32,
    {
        self.map(|pos_object| (range(other_pos, pos_object.pos()), pos_object))
            .min_by_key(|(length, _)| *length)
            .map(|(_, pos_object)| pos_object)
    }

    fn find_nearest_linear<V>(self, other_pos: Position) -> Option<V>
    where
        Self: Iterator<Item = V> + Sized,
        V: HasPosition,
    {
        self.find_nearest_by(other_pos, Position::get_range_to)
    }

    fn within_range<F, V>(self, center: Position, radius: u32, range: F) -> WithinRange<Self, F>
    where
        Self: Iterator<Item = V> + Sized,
        V: HasPosition,
        F: Fn(Position, Position) -> u32,
    {
        WithinRange {
            iter: self,
            center,
            radius,
            range,
        }
    }
}

impl<T: ?Sized> FindNearestItertools for T where T: Iterator {}

/// Items strictly closer than `radius` to `center`.
pub struct WithinRange<I, F> {
    iter: I,
    center: Position,
    radius: u32,
    range: F,
}

impl<I, F, V> Iterator for WithinRange<I, F>
where
    I: Iterator<Item = V>,
    V: HasPosition,
    F: Fn(Position, Position) -> u32,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let center = self.center;
        let radius = self.radius;
        let range = &self.range;

        self.iter.by_ref().find(|item| range(item.pos(), center) < radius)
    }
}
