use std::{cell::Cell, rc::Rc};

use crate::model::Coordinates;

/// Current location, shared between the controller and whatever edits it.
///
/// Single-threaded: all clones live on the thread that drives the controller.
/// Readers take a copy, so a change made while a fetch is in flight does not
/// affect that fetch.
#[derive(Debug, Clone, Default)]
pub struct SharedLocation(Rc<Cell<Coordinates>>);

impl SharedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self(Rc::new(Cell::new(coordinates)))
    }

    pub fn get(&self) -> Coordinates {
        self.0.get()
    }

    pub fn set(&self, coordinates: Coordinates) {
        self.0.set(coordinates);
    }
}
