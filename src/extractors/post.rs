use super::{block_text, compile_selector, element_text, split_lines};
use crate::config::SelectorConfig;
use crate::error::ScrapeError;
use crate::model::{Recipe, RecipeField};
use scraper::{ElementRef, Selector};
use std::fmt;

/// Why a post was left out of the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No element matched the field's selector
    Missing,
    /// The element was there but held only whitespace
    Empty,
}

/// A discarded post, identified by its position on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRejection {
    pub post_index: usize,
    pub field: RecipeField,
    pub reason: RejectReason,
}

impl fmt::Display for PostRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            RejectReason::Missing => "missing",
            RejectReason::Empty => "empty",
        };
        write!(f, "post #{}: field '{}' {}", self.post_index, self.field, reason)
    }
}

/// Pulls the five recipe fields out of one post, all or nothing.
pub struct PostExtractor {
    title: Selector,
    author: Selector,
    date: Selector,
    ingredients: Selector,
    instructions: Selector,
}

impl PostExtractor {
    pub fn new(selectors: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            title: compile_selector(&selectors.title.to_css())?,
            author: compile_selector(&selectors.author.to_css())?,
            date: compile_selector(&selectors.date.to_css())?,
            ingredients: compile_selector(&selectors.ingredients.to_css())?,
            instructions: compile_selector(&selectors.instructions.to_css())?,
        })
    }

    fn selector(&self, field: RecipeField) -> &Selector {
        match field {
            RecipeField::Title => &self.title,
            RecipeField::Author => &self.author,
            RecipeField::Date => &self.date,
            RecipeField::Ingredients => &self.ingredients,
            RecipeField::Instructions => &self.instructions,
        }
    }

    fn find<'a>(
        &self,
        post: ElementRef<'a>,
        field: RecipeField,
        post_index: usize,
    ) -> Result<ElementRef<'a>, PostRejection> {
        post.select(self.selector(field))
            .next()
            .ok_or(PostRejection {
                post_index,
                field,
                reason: RejectReason::Missing,
            })
    }

    fn text(
        &self,
        post: ElementRef,
        field: RecipeField,
        post_index: usize,
    ) -> Result<String, PostRejection> {
        let text = element_text(self.find(post, field, post_index)?);
        if text.is_empty() {
            return Err(PostRejection {
                post_index,
                field,
                reason: RejectReason::Empty,
            });
        }
        Ok(text)
    }

    fn lines(
        &self,
        post: ElementRef,
        field: RecipeField,
        post_index: usize,
    ) -> Result<Vec<String>, PostRejection> {
        let lines = split_lines(&block_text(self.find(post, field, post_index)?));
        if lines.is_empty() {
            return Err(PostRejection {
                post_index,
                field,
                reason: RejectReason::Empty,
            });
        }
        Ok(lines)
    }

    /// Extract a recipe from one post fragment.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported; no partially filled recipe is ever returned.
    pub fn extract(&self, post: ElementRef, post_index: usize) -> Result<Recipe, PostRejection> {
        Ok(Recipe {
            title: self.text(post, RecipeField::Title, post_index)?,
            author: self.text(post, RecipeField::Author, post_index)?,
            date: self.text(post, RecipeField::Date, post_index)?,
            ingredients: self.lines(post, RecipeField::Ingredients, post_index)?,
            instructions: self.lines(post, RecipeField::Instructions, post_index)?,
        })
    }
}
