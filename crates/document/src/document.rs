use crate::error::DocumentError;
use crate::hooks::{NoHooks, PageHooks};
use crate::page::Page;
use pagebuilder_layout::{LayoutConfig, PageItem};
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::PageSize;
use pagebuilder_traits::{Collaborators, DrawSurface};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentConfig {
    pub default_page_size: PageSize,
    /// Vertical distance in points between records laid out on one page.
    pub part_height: f32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::A4,
            part_height: 0.0,
        }
    }
}

#[derive(Debug)]
pub struct Document {
    config: DocumentConfig,
    layout: LayoutConfig,
    collaborators: Collaborators,
    hooks: Arc<dyn PageHooks>,
    pages: Vec<Page>,
    layout_offset: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentConfig::default(), LayoutConfig::default(), Collaborators::default())
    }
}

impl Document {
    /// `layout` and `collaborators` are handed to every page created later.
    pub fn new(config: DocumentConfig, layout: LayoutConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            layout,
            collaborators,
            hooks: Arc::new(NoHooks),
            pages: Vec::new(),
            layout_offset: 0.0,
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn PageHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn set_hooks(&mut self, hooks: Arc<dyn PageHooks>) {
        self.hooks = hooks;
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DocumentConfig {
        &mut self.config
    }

    pub fn default_page_size(&self) -> PageSize {
        self.config.default_page_size
    }

    pub fn set_default_page_size(&mut self, size: PageSize) {
        self.config.default_page_size = size;
    }

    /// The offset used by the most recent layout call, in points.
    pub fn layout_offset(&self) -> f32 {
        self.layout_offset
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Inserts a new page at `index`, clamped to the end of the document.
    pub fn insert_page(&mut self, index: usize, size: PageSize) -> &mut Page {
        let index = index.min(self.pages.len());
        let mut page = Page::new(size, self.layout.clone(), self.collaborators.clone());
        self.hooks.page_builder_loaded(&mut page);
        log::debug!("Inserting {:?} page at {} of {}", size, index, self.pages.len());
        self.pages.insert(index, page);
        &mut self.pages[index]
    }

    pub fn insert_default_page(&mut self, index: usize) -> &mut Page {
        self.insert_page(index, self.config.default_page_size)
    }

    pub fn remove_page(&mut self, index: usize) -> Result<Page, DocumentError> {
        self.check_index(index)?;
        Ok(self.pages.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(DocumentError::PageIndexOutOfRange {
                index,
                len: self.pages.len(),
            })
        }
    }

    /// Lays out `object` with `map` on the page at `page_index`, shifted down
    /// by `part_index * part_height`. Returns the items produced.
    pub fn layout_for_object(
        &mut self,
        object: &Value,
        map: &MarkupNode,
        page_index: usize,
        part_index: usize,
    ) -> Result<Vec<PageItem>, DocumentError> {
        self.check_index(page_index)?;
        let offset = part_index as f32 * self.config.part_height;
        let hooks = Arc::clone(&self.hooks);
        let page = &mut self.pages[page_index];
        if !page.is_laid_out() {
            hooks.will_layout_page(page_index, page);
        }
        page.builder_mut().set_layout_offset(offset);
        self.layout_offset = offset;
        let items = page.layout_for_object(object, map)?;
        log::debug!(
            "Page {} part {}: {} items at offset {}",
            page_index,
            part_index,
            items.len(),
            offset
        );
        Ok(items)
    }

    /// Runs a load-only pass of `map` on the page at `page_index`.
    pub fn load_for_page(
        &mut self,
        map: &MarkupNode,
        page_index: usize,
    ) -> Result<Vec<String>, DocumentError> {
        self.check_index(page_index)?;
        Ok(self.pages[page_index].load(map))
    }

    pub fn draw_page(
        &mut self,
        index: usize,
        surface: &mut dyn DrawSurface,
    ) -> Result<(), DocumentError> {
        self.check_index(index)?;
        self.pages[index].draw(index, surface);
        Ok(())
    }

    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.draw(index, surface);
        }
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
