//! Keymap compilation pipeline
//!
//! ## Flow
//!
//! 1. Register modifiers (MODIFIERS)
//! 2. Register group latches (GROUPS)
//! 3. Resolve BASE, then every override section in document order
//! 4. Assemble per-key blocks
//! 5. Render the XKB document
//!
//! All sections write into one [`KeyTable`]; later sections shadow earlier
//! ones with a warning. Nothing is rendered unless every step succeeds.

use std::path::Path;

use log::info;

use crate::codegen::{render_keymap, Literals};
use crate::config::{LayoutDocument, TemplateConfig};
use crate::domain::services::{assemble, GroupRegistry, KeyTable, ModifierRegistry, Resolver};
use crate::domain::value_objects::ConflictWarning;
use crate::error::XkbgenResult;

/// Output of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// The rendered `xkb_keymap` document
    pub keymap: String,
    /// Values replaced by later assignments
    pub warnings: Vec<ConflictWarning>,
    /// Number of physical keys emitted
    pub key_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct KeymapPipeline {
    template: TemplateConfig,
}

impl KeymapPipeline {
    pub fn new(template: TemplateConfig) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &TemplateConfig {
        &self.template
    }

    /// Load and compile a layout file.
    pub fn compile_file(&self, path: &Path) -> XkbgenResult<Compilation> {
        info!("Loading {}…", path.display());
        let document = LayoutDocument::load(path)?;
        self.compile(&document)
    }

    /// Compile layout YAML given as a string.
    pub fn compile_str(&self, yaml: &str) -> XkbgenResult<Compilation> {
        let document = LayoutDocument::from_yaml_str(yaml)?;
        self.compile(&document)
    }

    pub fn compile(&self, document: &LayoutDocument) -> XkbgenResult<Compilation> {
        let mut table = KeyTable::new();
        let mut literals = Literals::default();
        for (_label, text) in &document.literals {
            literals.push_prologue(text);
        }

        info!("Adding modifiers…");
        let mut modifiers = ModifierRegistry::new();
        for (name, spec) in &document.modifiers {
            modifiers.register(&mut table, name, spec.clone())?;
        }
        for line in modifiers.modifier_maps() {
            literals.push_epilogue(line);
        }

        let mut groups = GroupRegistry::new();
        for (name, shortcut) in &document.groups {
            groups.register_latch(&mut table, &modifiers, name, shortcut)?;
        }

        {
            let mut resolver = Resolver::new(&mut table, &modifiers, &groups)
                .with_rows(document.rows.as_ref());
            resolver.resolve_section("BASE", &document.base)?;
            for (name, section) in &document.overrides {
                info!("Merging [{name}]");
                resolver.resolve_section(name, section)?;
            }
        }

        let blocks = assemble(&table)?;
        let keymap = render_keymap(&blocks, &literals, &self.template);
        Ok(Compilation {
            keymap,
            warnings: table.warnings().to_vec(),
            key_count: blocks.len(),
        })
    }
}
