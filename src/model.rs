use serde::Serialize;
use std::fmt;

/// One fully populated recipe post.
///
/// Only the post extractor builds these, and only after all five fields
/// were found with non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub author: String,
    pub date: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// The five logical fields of a recipe post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Title,
    Author,
    Date,
    Ingredients,
    Instructions,
}

impl RecipeField {
    pub const ALL: [RecipeField; 5] = [
        RecipeField::Title,
        RecipeField::Author,
        RecipeField::Date,
        RecipeField::Ingredients,
        RecipeField::Instructions,
    ];

    /// JSON key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::Author => "author",
            RecipeField::Date => "date",
            RecipeField::Ingredients => "ingredients",
            RecipeField::Instructions => "instructions",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
