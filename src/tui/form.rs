use crate::model::intent::Intent;
use crate::model::item::{Category, Quantity};
use crate::ops::store::ValidationError;
use crate::util::unicode;

/// Which add-form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Quantity,
    Description,
}

impl FormField {
    /// Tab order, left to right as rendered
    pub const ORDER: [FormField; 3] = [
        FormField::Category,
        FormField::Quantity,
        FormField::Description,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Transient state of the "What do you need to pack?" form.
///
/// Lives only as long as the TUI session and is reset after every
/// successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub description: String,
    /// Byte offset into `description`, always on a grapheme boundary
    pub cursor: usize,
    pub quantity: Quantity,
    pub category: Category,
    pub focus: FormField,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm {
            description: String::new(),
            cursor: 0,
            quantity: Quantity::ONE,
            category: Category::General,
            focus: FormField::Description,
        }
    }
}

impl AddForm {
    /// Back to defaults: empty description, quantity 1, category General
    pub fn reset(&mut self) {
        *self = AddForm::default();
    }

    /// Check the fields and build the add intent. A blank description is
    /// refused here, before the store is involved.
    pub fn to_intent(&self) -> Result<Intent, ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Intent::Add {
            description: self.description.clone(),
            quantity: self.quantity,
            category: self.category,
        })
    }

    // -- selectors --------------------------------------------------------

    /// Step the focused selector forward; no-op on the description field
    pub fn cycle_next(&mut self) {
        match self.focus {
            FormField::Category => self.category = self.category.next(),
            FormField::Quantity => self.quantity = self.quantity.next(),
            FormField::Description => {}
        }
    }

    pub fn cycle_prev(&mut self) {
        match self.focus {
            FormField::Category => self.category = self.category.prev(),
            FormField::Quantity => self.quantity = self.quantity.prev(),
            FormField::Description => {}
        }
    }

    // -- description editing ----------------------------------------------

    pub fn insert_str(&mut self, text: &str) {
        self.description.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.description.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.description, self.cursor) {
            self.description.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete_forward(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.description, self.cursor) {
            self.description.replace_range(self.cursor..next, "");
        }
    }

    /// Delete back to the start of the previous word
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.description, self.cursor);
        self.description.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.description, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.description, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.description.len();
    }
}
