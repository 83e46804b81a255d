use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::canvas::{self, Canvas};
use crate::error::ImageGenerationError;

/// Context available to all drawing steps
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub verbose: bool,
}

/// Trait that all drawing steps must implement
pub trait DrawStep: Send + Sync {
    /// Draw onto the canvas, mutating it in place
    fn draw(&self, canvas: &mut Canvas, context: &RenderContext) -> Result<()>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;
}

/// One named illustration: a target filename plus the ordered drawing steps
/// that produce it
pub struct Illustration {
    name: String,
    filename: String,
    steps: Vec<Box<dyn DrawStep>>,
}

impl Illustration {
    /// Create an empty illustration with its name and output filename
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            steps: Vec::new(),
        }
    }

    /// Add a drawing step to the illustration
    pub fn add_step(mut self, step: Box<dyn DrawStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Render all steps in order onto a fresh background-filled canvas.
    /// Pure in-memory operation; no filesystem access.
    pub fn render(&self, context: &RenderContext) -> Result<Canvas> {
        let mut canvas = canvas::new_canvas();

        for step in &self.steps {
            if context.verbose {
                println!("  Applying step: {}", step.name());
            }
            step.draw(&mut canvas, context)?;
        }

        Ok(canvas)
    }
}

/// Renders illustrations and persists them as JPEG files under a single
/// output directory
pub struct Renderer {
    output_dir: PathBuf,
    context: RenderContext,
}

impl Renderer {
    /// Create a renderer writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            context: RenderContext { verbose: false },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the given illustration will be saved to
    pub fn target_path(&self, illustration: &Illustration) -> PathBuf {
        self.output_dir.join(illustration.filename())
    }

    /// Generate one illustration and save it under the output directory.
    ///
    /// Any internal failure is logged with the illustration's name and then
    /// propagated; drawing, directory-creation and encoding failures are not
    /// distinguished.
    pub fn generate(&self, illustration: &Illustration) -> Result<PathBuf, ImageGenerationError> {
        println!("Creating {} image...", illustration.name());

        match self.generate_inner(illustration) {
            Ok(path) => {
                println!("{} image saved to: {}", illustration.name(), path.display());
                Ok(path)
            }
            Err(source) => {
                eprintln!("Error creating {} image: {}", illustration.name(), source);
                Err(ImageGenerationError {
                    operation: illustration.name().to_string(),
                    source,
                })
            }
        }
    }

    fn generate_inner(&self, illustration: &Illustration) -> Result<PathBuf> {
        let canvas = illustration.render(&self.context)?;

        // Create-if-absent, parents included; idempotent across runs
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            )
        })?;

        let path = self.target_path(illustration);
        canvas
            .save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save image: {}", e))?;

        Ok(path)
    }

    /// Generate every illustration in order, stopping at the first failure.
    /// Files already written before a failure are left on disk.
    pub fn generate_all(
        &self,
        illustrations: &[Illustration],
    ) -> Result<Vec<PathBuf>, ImageGenerationError> {
        let mut paths = Vec::with_capacity(illustrations.len());

        for illustration in illustrations {
            paths.push(self.generate(illustration)?);
        }

        Ok(paths)
    }
}
