//! Render and locate command implementations

use anyhow::{bail, Result};
use clap::Args;

use super::utils::parse_assignment;
use footnotes_core::domain::DEFAULT_TEMPLATE_EXTENSION;
use footnotes_core::{EngineConfig, Placeholders, TemplateDescriptor, TemplateEngine};

#[derive(Args)]
pub struct RenderArgs {
    /// Template category, e.g. 'public' or 'dashboard'
    #[arg(value_name = "TYPE")]
    pub file_type: String,

    /// Template name without extension
    #[arg(value_name = "NAME")]
    pub file_name: String,

    /// Template file extension
    #[arg(long, value_name = "EXT", default_value = DEFAULT_TEMPLATE_EXTENSION)]
    pub ext: String,

    /// Placeholder value, applied in the order given (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

#[derive(Args)]
pub struct LocateArgs {
    /// Template category, e.g. 'public' or 'dashboard'
    #[arg(value_name = "TYPE")]
    pub file_type: String,

    /// Template name without extension
    #[arg(value_name = "NAME")]
    pub file_name: String,

    /// Template file extension
    #[arg(long, value_name = "EXT", default_value = DEFAULT_TEMPLATE_EXTENSION)]
    pub ext: String,
}

pub fn run_render(args: RenderArgs, config: &EngineConfig) -> Result<()> {
    let placeholders = args
        .set
        .iter()
        .map(|arg| parse_assignment(arg))
        .collect::<Result<Placeholders>>()?;

    let engine = TemplateEngine::from_config(&config.template);
    let mut template = engine.template_with_extension(&args.file_type, &args.file_name, &args.ext);
    if !template.is_loaded() {
        bail!("Template not found: {}", template.descriptor());
    }

    if !placeholders.is_empty() && !template.replace(&placeholders) {
        tracing::debug!(template = %template.descriptor(), "template is empty, nothing replaced");
    }
    println!("{}", template.content());
    Ok(())
}

pub fn run_locate(args: LocateArgs, config: &EngineConfig) -> Result<()> {
    let descriptor = TemplateDescriptor::new(args.file_type, args.file_name).with_extension(args.ext);
    let engine = TemplateEngine::from_config(&config.template);
    match engine.locate(&descriptor) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!("Template not found: {}", descriptor),
    }
}
