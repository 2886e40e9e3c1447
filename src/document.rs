use log::info;

use crate::element::{Element, ElementType};
use crate::surface::Surface;

/// The display list plus its redo stack.
///
/// The display list doubles as the undo stack: its last element is the
/// most recent commit. Every element lives in exactly one of the two lists.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<ElementType>,
    redo_stack: Vec<ElementType>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the display list.
    ///
    /// A new commit starts a new branch of history, so the redo stack is dropped.
    pub fn commit(&mut self, element: impl Into<ElementType>) {
        let element = element.into();
        info!("Committing {} {}", element.element_type(), element.id());
        self.elements.push(element);
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Move the last element onto the redo stack. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.elements.pop() {
            Some(element) => {
                info!("Undo {} {}", element.element_type(), element.id());
                self.redo_stack.push(element);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone element back. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(element) => {
                info!("Redo {} {}", element.element_type(), element.id());
                self.elements.push(element);
                true
            }
            None => false,
        }
    }

    /// Empty both the display list and the redo stack
    pub fn clear(&mut self) {
        info!(
            "Clearing {} elements and {} redo entries",
            self.elements.len(),
            self.redo_stack.len()
        );
        self.elements.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed elements in paint order
    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    /// Undone elements, the next one to redo last
    pub fn redo_stack(&self) -> &[ElementType] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Draw every committed element in order
    pub fn draw(&self, surface: &mut dyn Surface) {
        for element in &self.elements {
            element.draw(surface);
        }
    }
}
