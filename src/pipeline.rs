//! End-to-end generation: map, configuration and records in; a laid-out
//! [`Document`] or its recorded draw operations out.

use crate::error::BuildError;
use crate::xml;
use pagebuilder_document::{Document, DocumentConfig, PageHooks};
use pagebuilder_format::{FormatSettings, Formatters};
use pagebuilder_layout::LayoutConfig;
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::AttributeScales;
use pagebuilder_traits::{Collaborators, DrawOp, RecordingSurface};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Configuration read from JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    pub scales: AttributeScales,
    pub formats: FormatSettings,
    pub document: DocumentConfig,
    /// Records placed on one page before the next page is started. Each
    /// record on a page is shifted down by `document.partHeight`.
    pub records_per_page: usize,
    pub highlight_container_rects: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scales: AttributeScales::default(),
            formats: FormatSettings::default(),
            document: DocumentConfig::default(),
            records_per_page: 1,
            highlight_container_rects: false,
        }
    }
}

impl PipelineConfig {
    pub fn from_json(source: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(source)?)
    }

    fn layout_config(&self) -> Result<LayoutConfig, BuildError> {
        Ok(LayoutConfig {
            scales: self.scales,
            formatters: Formatters::from_settings(&self.formats)?,
            highlight_container_rects: self.highlight_container_rects,
            ..LayoutConfig::default()
        })
    }
}

/// A builder for creating a [`Pipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    map: Option<MarkupNode>,
    constants: Option<MarkupNode>,
    config: PipelineConfig,
    collaborators: Collaborators,
    hooks: Option<Arc<dyn PageHooks>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(mut self, map: MarkupNode) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_map_source(self, source: &str) -> Result<Self, BuildError> {
        Ok(self.with_map(xml::parse_map(source)?))
    }

    pub fn with_map_file<P: AsRef<Path>>(self, path: P) -> Result<Self, BuildError> {
        Ok(self.with_map(xml::parse_map_file(path)?))
    }

    /// A map loaded on every page before any record is laid out. Only its
    /// constants are used.
    pub fn with_constants_map(mut self, map: MarkupNode) -> Self {
        self.constants = Some(map);
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, BuildError> {
        let source = fs::read_to_string(path)?;
        Ok(self.with_config(PipelineConfig::from_json(&source)?))
    }

    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn PageHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn build(self) -> Result<Pipeline, BuildError> {
        let map = self
            .map
            .ok_or_else(|| BuildError::Config("No map was provided".to_string()))?;
        if self.config.records_per_page == 0 {
            return Err(BuildError::Config(
                "recordsPerPage must be at least 1".to_string(),
            ));
        }
        let layout = self.config.layout_config()?;
        Ok(Pipeline {
            map,
            constants: self.constants,
            config: self.config,
            layout,
            collaborators: self.collaborators,
            hooks: self.hooks,
        })
    }
}

#[derive(Debug)]
pub struct Pipeline {
    map: MarkupNode,
    constants: Option<MarkupNode>,
    config: PipelineConfig,
    layout: LayoutConfig,
    collaborators: Collaborators,
    hooks: Option<Arc<dyn PageHooks>>,
}

impl Pipeline {
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn map(&self) -> &MarkupNode {
        &self.map
    }

    /// Lays out every record. Record `i` lands on page
    /// `i / records_per_page` as part `i % records_per_page`.
    pub fn generate(&self, records: &[Value]) -> Result<Document, BuildError> {
        let mut document = Document::new(
            self.config.document.clone(),
            self.layout.clone(),
            self.collaborators.clone(),
        );
        if let Some(hooks) = &self.hooks {
            document.set_hooks(Arc::clone(hooks));
        }

        let per_page = self.config.records_per_page.max(1);
        for (i, record) in records.iter().enumerate() {
            let (page_index, part_index) = (i / per_page, i % per_page);
            if page_index == document.len() {
                document.insert_default_page(page_index);
                if let Some(constants) = &self.constants {
                    document.load_for_page(constants, page_index)?;
                }
            }
            document.layout_for_object(record, &self.map, page_index, part_index)?;
        }
        log::info!(
            "Laid out {} records on {} pages",
            records.len(),
            document.len()
        );
        Ok(document)
    }

    /// Generates and draws the document onto a recording surface.
    pub fn generate_ops(&self, records: &[Value]) -> Result<Vec<DrawOp>, BuildError> {
        let mut document = self.generate(records)?;
        let mut surface = RecordingSurface::new();
        document.draw(&mut surface);
        Ok(surface.into_ops())
    }
}
