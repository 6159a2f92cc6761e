//! igdoc - template lookup and cross-references for IG pages.

use anyhow::{Context, Result, bail};
use clap::Parser;
use igdoc::{
    cli::{Cli, Commands},
    config::IgConfig,
    log,
    resource::{DirectoryCorpus, load_naming_system},
    template::TemplateStore,
    xref::{StaticPageContext, XrefRenderer},
};
use std::{
    io::{Write, stdout},
    path::Path,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = IgConfig::load(&cli)?;

    let output = match &cli.command {
        Commands::Template { resource_type } => {
            let store = load_templates(&config)?;
            match store.resolve(resource_type) {
                Some(template) => template.to_owned(),
                None => bail!("No template for resource type `{resource_type}`"),
            }
        }
        Commands::ListTemplates => {
            let store = load_templates(&config)?;
            store.keys().iter().map(|key| format!("{key}\n")).collect()
        }
        Commands::Xref { subject } => cross_reference(&config, subject)?,
    };

    let mut out = stdout().lock();
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Load the configured template directory into a fresh store
fn load_templates(config: &IgConfig) -> Result<TemplateStore> {
    let mut store = TemplateStore::with_extension(config.templates.extension.clone());
    store
        .load(&config.templates.dir)
        .with_context(|| format!("Failed to load templates from {}", config.templates.dir.display()))?;
    Ok(store)
}

/// Render the "used by" fragment for the NamingSystem at `subject`
fn cross_reference(config: &IgConfig, subject: &Path) -> Result<String> {
    let naming_system = load_naming_system(subject)
        .with_context(|| format!("Failed to read NamingSystem {}", subject.display()))?;

    let corpus = DirectoryCorpus::new(&config.corpus.dir)
        .with_path_prefix(config.corpus.path_prefix.clone());
    let page = config.render.translations.iter().fold(
        StaticPageContext::new(config.render.language.clone())
            .with_change_summary(config.change_summary()?),
        |page, (language, names)| page.with_translations(language.clone(), names.clone()),
    );

    let html = XrefRenderer::new(&corpus, &page)
        .cross_reference(&naming_system)
        .with_context(|| format!("Failed to scan resources in {}", corpus.root().display()))?;

    log!("xref"; "rendered references for {}", subject.display());
    Ok(html)
}
