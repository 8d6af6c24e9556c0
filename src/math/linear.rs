
use super::*;

/// A world-space line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    source:      P3,
    destination: P3,
}

impl Segment {
    pub fn new(source: P3, destination: P3) -> Segment {
        Segment { source, destination }
    }

    pub fn source(&self) -> P3 {
        self.source
    }

    pub fn destination(&self) -> P3 {
        self.destination
    }

    pub fn length(&self) -> f32 {
        (self.destination - self.source).norm()
    }
}
