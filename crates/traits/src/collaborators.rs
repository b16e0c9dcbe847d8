use crate::color::{ColorResolver, HexColorResolver};
use crate::field::{FieldResolver, JsonFieldResolver};
use crate::font::{AliasFontFamilyResolver, FontFamilyResolver};
use crate::resource::{ImageProvider, InMemoryImageProvider};
use crate::text::{HeuristicTextComposer, TextComposer};
use crate::validate::{AcceptAllValidator, StringValidator};
use std::sync::Arc;

/// The services a page builder delegates to.
///
/// `Default` wires the reference implementations, with an empty image store.
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub text_composer: Arc<dyn TextComposer>,
    pub images: Arc<dyn ImageProvider>,
    pub colors: Arc<dyn ColorResolver>,
    pub font_families: Arc<dyn FontFamilyResolver>,
    pub fields: Arc<dyn FieldResolver>,
    pub validator: Arc<dyn StringValidator>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            text_composer: Arc::new(HeuristicTextComposer::default()),
            images: Arc::new(InMemoryImageProvider::new()),
            colors: Arc::new(HexColorResolver::new()),
            font_families: Arc::new(AliasFontFamilyResolver::new()),
            fields: Arc::new(JsonFieldResolver),
            validator: Arc::new(AcceptAllValidator),
        }
    }
}

impl Collaborators {
    pub fn with_text_composer(mut self, composer: Arc<dyn TextComposer>) -> Self {
        self.text_composer = composer;
        self
    }

    pub fn with_images(mut self, images: Arc<dyn ImageProvider>) -> Self {
        self.images = images;
        self
    }

    pub fn with_colors(mut self, colors: Arc<dyn ColorResolver>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_font_families(mut self, families: Arc<dyn FontFamilyResolver>) -> Self {
        self.font_families = families;
        self
    }

    pub fn with_fields(mut self, fields: Arc<dyn FieldResolver>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn StringValidator>) -> Self {
        self.validator = validator;
        self
    }
}
