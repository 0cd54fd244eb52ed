// src/pipeline.rs

use crate::compositor::dark_variants;
use crate::config::ExportConfig;
use crate::error::PipelineError;
use cascade_css::{TypographyAssembler as _, category_sheet, typography_class_sheet};
use cascade_tokens::{Theme, Token, TokenCategory};
use cascade_traits::{FileSink, OutputFile, TokenRepository};
use log::{debug, info};
use std::sync::Arc;
use tokio::runtime::Builder;
use tokio::task;

/// Scalar categories with their output file names. Each file is generated
/// independently from the full un-themed token set filtered by category.
const SCALAR_SHEETS: [(TokenCategory, &str); 7] = [
    (TokenCategory::Size, "size.css"),
    (TokenCategory::Spacing, "spacing.css"),
    (TokenCategory::Radius, "border-radius.css"),
    (TokenCategory::BorderWidth, "border-width.css"),
    (TokenCategory::FontSize, "font-size.css"),
    (TokenCategory::LetterSpacing, "letter-spacing.css"),
    (TokenCategory::FontWeight, "font-weight.css"),
];

/// One generation pass: reads an immutable snapshot from the repository,
/// produces the default sheet, one sheet per selected theme, the scalar
/// category sheets, and the typography class sheet, then hands everything
/// to the sink.
pub struct ExportPipeline {
    repository: Arc<dyn TokenRepository>,
    sink: Arc<dyn FileSink>,
    config: ExportConfig,
}

impl std::fmt::Debug for ExportPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportPipeline")
            .field("repository", &self.repository.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ExportPipeline {
    pub fn new(
        repository: Arc<dyn TokenRepository>,
        sink: Arc<dyn FileSink>,
        config: ExportConfig,
    ) -> Self {
        Self { repository, sink, config }
    }

    pub async fn run(&self) -> Result<(), PipelineError> {
        match self.repository.version() {
            Some(version) => info!(
                "Fetching snapshot {} from {}.",
                version,
                self.repository.name()
            ),
            None => info!("Fetching snapshot from {}.", self.repository.name()),
        }
        let mut tokens = self.repository.tokens()?;
        let groups = self.repository.token_groups()?;
        let themes = self.repository.themes()?;
        info!(
            "Snapshot: {} tokens, {} groups, {} themes.",
            tokens.len(),
            groups.len(),
            themes.len()
        );

        if self.config.assemble_typography {
            let assembler = self.config.assembler.build();
            debug!("Assembling composite typography with {}.", assembler.name());
            let assembled = assembler.assemble(&tokens, &groups)?;
            merge_assembled(&mut tokens, assembled);
        }

        let disclaimer = self.config.disclaimer;
        let mut files = Vec::new();

        // Default sheet from the un-themed token set.
        let default_sheet = category_sheet(&tokens, &groups, TokenCategory::Color, disclaimer)?;
        files.push(OutputFile::new(
            "./",
            format!("themes/{}-theme.scss", self.config.default_theme_file_stem),
            default_sheet,
        ));

        // Theme sheets are independent of one another and of the default
        // sheet; fan out over the shared snapshot and gather in theme order.
        let selected: Vec<Theme> =
            dark_variants(&themes, &self.config.dark_marker).into_iter().cloned().collect();
        let snapshot = Arc::new((tokens, groups));
        let mut handles = Vec::with_capacity(selected.len());
        for theme in selected {
            let snapshot = Arc::clone(&snapshot);
            let repository = Arc::clone(&self.repository);
            let code_name = theme.code_name.clone();
            debug!("Generating theme sheet for '{}'.", code_name);
            let handle = task::spawn_blocking(move || -> Result<String, PipelineError> {
                let (tokens, groups) = snapshot.as_ref();
                let effective = repository.apply_theme(tokens, &theme)?;
                Ok(category_sheet(&effective, groups, TokenCategory::Color, disclaimer)?)
            });
            handles.push((code_name, handle));
        }
        for (code_name, handle) in handles {
            let content = handle
                .await
                .map_err(|e| PipelineError::Other(format!("Theme worker panicked: {e}")))??;
            files.push(OutputFile::new("./", format!("themes/{code_name}-theme.scss"), content));
        }

        let (tokens, groups) = snapshot.as_ref();
        for (category, file_name) in SCALAR_SHEETS {
            debug!("Generating {file_name}.");
            let content = category_sheet(tokens, groups, category, disclaimer)?;
            files.push(OutputFile::new("./", file_name, content));
        }

        debug!("Generating typography.css.");
        let content = typography_class_sheet(tokens, groups, disclaimer)?;
        files.push(OutputFile::new("./", "typography.css", content));

        info!("Writing {} files to {}.", files.len(), self.sink.name());
        for file in &files {
            self.sink.write(file)?;
        }
        info!("Generation pass finished.");
        Ok(())
    }

    /// Convenience wrapper for callers without a runtime of their own.
    pub fn run_blocking(&self) -> Result<(), PipelineError> {
        let rt = Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");
        rt.block_on(self.run())
    }
}

/// Replaces tokens that the assembler rebuilt (matched by id) and appends
/// the newly created ones.
fn merge_assembled(tokens: &mut Vec<Token>, assembled: Vec<Token>) {
    for token in assembled {
        match tokens.iter_mut().find(|existing| existing.id == token.id) {
            Some(existing) => *existing = token,
            None => tokens.push(token),
        }
    }
}

#[derive(Default)]
pub struct PipelineBuilder {
    repository: Option<Arc<dyn TokenRepository>>,
    sink: Option<Arc<dyn FileSink>>,
    config: ExportConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_repository(mut self, repository: Arc<dyn TokenRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn FileSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.config = ExportConfig::from_json(json)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        let repository = self
            .repository
            .ok_or_else(|| PipelineError::Config("No token repository provided".to_string()))?;
        let sink = self
            .sink
            .ok_or_else(|| PipelineError::Config("No file sink provided".to_string()))?;
        Ok(ExportPipeline::new(repository, sink, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_tokens::{ColorValue, TokenValue};
    use cascade_traits::{InMemoryFileSink, InMemoryTokenRepository};
    use cascade_types::Color;

    #[test]
    fn test_builder_requires_repository_and_sink() {
        assert!(matches!(
            PipelineBuilder::new().build().unwrap_err(),
            PipelineError::Config(_)
        ));

        let sink_only =
            PipelineBuilder::new().with_sink(Arc::new(InMemoryFileSink::new())).build();
        assert!(matches!(sink_only.unwrap_err(), PipelineError::Config(_)));
    }

    #[test]
    fn test_merge_assembled_replaces_by_id() {
        let mut tokens = vec![Token::new(
            "c1",
            "Bg",
            TokenCategory::Color,
            "g1",
            TokenValue::Color(ColorValue::literal(Color::rgb(0, 0, 0))),
        )];
        let replacement = Token::new(
            "c1",
            "Bg",
            TokenCategory::Color,
            "g1",
            TokenValue::Color(ColorValue::literal(Color::rgb(9, 9, 9))),
        );
        let fresh = Token::new(
            "c2",
            "Fg",
            TokenCategory::Color,
            "g1",
            TokenValue::Color(ColorValue::literal(Color::rgb(1, 1, 1))),
        );

        merge_assembled(&mut tokens, vec![replacement.clone(), fresh.clone()]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], replacement);
        assert_eq!(tokens[1], fresh);
    }

    #[test]
    fn test_run_blocking_with_empty_snapshot() {
        let repository = Arc::new(InMemoryTokenRepository::new());
        let sink = Arc::new(InMemoryFileSink::new());
        let pipeline = PipelineBuilder::new()
            .with_repository(repository)
            .with_sink(Arc::clone(&sink) as Arc<dyn FileSink>)
            .build()
            .unwrap();

        pipeline.run_blocking().unwrap();
        // Default sheet + 7 scalar sheets + typography, no theme sheets.
        assert_eq!(sink.len(), 9);
        assert!(sink.find("themes/light-theme.scss").is_some());
    }
}
