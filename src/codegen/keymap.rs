//! Keymap document rendering.

use crate::config::TemplateConfig;
use crate::domain::services::{GroupLevels, KeyBlock};

use super::symbols::{render_action, render_symbol, RenderedItem};

/// Verbatim XKB text placed before and after the generated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literals {
    pub prologue: Vec<String>,
    pub epilogue: Vec<String>,
}

impl Literals {
    pub fn push_prologue(&mut self, text: &str) {
        self.prologue.push(with_newline(text));
    }

    pub fn push_epilogue(&mut self, text: &str) {
        self.epilogue.push(with_newline(text));
    }
}

fn with_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// Render the whole `xkb_keymap` document.
pub fn render_keymap(
    blocks: &[KeyBlock<'_>],
    literals: &Literals,
    template: &TemplateConfig,
) -> String {
    let indent = template.indent.as_str();
    let inner = indent.repeat(2);
    let keys: String = blocks
        .iter()
        .map(|block| render_key_block(block, indent))
        .collect();

    let mut out = String::from("// Generated by xkbgen (YAML→XKB config).\n");
    out.push_str("xkb_keymap {\n");
    out.push_str(&format!(
        "{indent}xkb_keycodes  {{ include \"{}\" }};\n",
        template.keycodes
    ));
    out.push_str(&format!(
        "{indent}xkb_types     {{ include \"{}\" }};\n",
        template.types
    ));
    out.push_str(&format!(
        "{indent}xkb_compat    {{ include \"{}\" }};\n",
        template.compat
    ));
    out.push_str(&format!("{indent}xkb_symbols   {{\n"));
    push_section(&mut out, &inner, "Prologue literals.", &literals.prologue.concat());
    push_section(&mut out, &inner, "Keys.", &keys);
    push_section(&mut out, &inner, "Epilogue literals.", &literals.epilogue.concat());
    out.push_str(&format!("{indent}}};\n"));
    if let Some(geometry) = &template.geometry {
        out.push_str(&format!(
            "{indent}xkb_geometry  {{ include \"{geometry}\" }};\n"
        ));
    }
    out.push_str("};\n");
    out
}

fn push_section(out: &mut String, indent: &str, title: &str, body: &str) {
    out.push_str(&format!("{indent}// {title}\n"));
    out.push_str(&indent_lines(body, indent));
    if !body.is_empty() && !body.ends_with('\n') {
        out.push('\n');
    }
}

/// Prefix every line that has content; blank lines stay as they are.
fn indent_lines(text: &str, prefix: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

/// Render one `replace key <K> { ... };` block.
pub fn render_key_block(block: &KeyBlock<'_>, indent: &str) -> String {
    let mut fields = vec![format!("{indent}type = \"{}\"", block.class.xkb_type())];
    for group in &block.groups {
        fields.extend(render_group(group, indent));
    }
    format!("replace key {} {{\n{}\n}};\n", block.key, fields.join(",\n"))
}

fn render_group(group: &GroupLevels<'_>, indent: &str) -> Vec<String> {
    let mut fields = Vec::new();
    if group.has_symbols() {
        let items: Vec<_> = group
            .levels
            .iter()
            .map(|entry| render_symbol(entry.and_then(|e| e.symbol.as_deref())))
            .collect();
        fields.push(render_list(
            &format!("symbols[Group{}]", group.group + 1),
            &items,
            indent,
        ));
    }
    if group.has_actions() {
        let items: Vec<_> = group
            .levels
            .iter()
            .map(|entry| render_action(entry.and_then(|e| e.action.as_ref())))
            .collect();
        fields.push(render_list(
            &format!("actions[Group{}]", group.group + 1),
            &items,
            indent,
        ));
    }
    fields
}

fn render_list(name: &str, items: &[RenderedItem], indent: &str) -> String {
    let mut out = format!("{indent}{name} = [\n");
    for (i, item) in items.iter().enumerate() {
        let separator = if i + 1 < items.len() { "," } else { "" };
        out.push_str(&format!("{indent}{indent}{}{separator}", item.text));
        if let Some(comment) = &item.comment {
            out.push_str(&format!(" // {comment}"));
        }
        out.push('\n');
    }
    out.push_str(&format!("{indent}]"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Action, KeyEntry, KeyIndex};
    use crate::domain::services::{assemble, KeyTable};

    #[test]
    fn key_block_lists_symbols_and_actions() {
        let mut table = KeyTable::new();
        table.canonicalize(KeyEntry::new(KeyIndex::new("<AB05>", 0, 0)).with_symbol("b"));
        table.canonicalize(
            KeyEntry::new(KeyIndex::new("<AB05>", 0, 2)).with_action(Action::LatchGroup { group: 1 }),
        );
        let blocks = assemble(&table).unwrap();

        let expected = "\
replace key <AB05> {
  type = \"FOUR_LEVEL\",
  symbols[Group1] = [
    U0062, // LATIN SMALL LETTER B
    NoSymbol,
    NoSymbol,
    NoSymbol
  ],
  actions[Group1] = [
    NoAction(),
    NoAction(),
    LatchGroup(group=2),
    NoAction()
  ]
};
";
        assert_eq!(render_key_block(&blocks[0], "  "), expected);
    }

    #[test]
    fn action_only_group_has_no_symbol_list() {
        let mut table = KeyTable::new();
        table.canonicalize(
            KeyEntry::new(KeyIndex::new("<MENU>", 0, 0)).with_action(Action::LatchGroup { group: 1 }),
        );
        let blocks = assemble(&table).unwrap();
        let rendered = render_key_block(&blocks[0], "  ");
        assert!(!rendered.contains("symbols["));
        assert!(rendered.contains("actions[Group1]"));
    }

    #[test]
    fn keymap_wraps_literals_and_keys() {
        let mut table = KeyTable::new();
        table.canonicalize(KeyEntry::new(KeyIndex::new("<SPCE>", 0, 0)).with_symbol(" "));
        let blocks = assemble(&table).unwrap();
        let mut literals = Literals::default();
        literals.push_prologue("name[Group1] = \"Test\";\n\ninclude \"pc\"");
        literals.push_epilogue("modifier_map Shift { <LFSH> };\n");

        let keymap = render_keymap(&blocks, &literals, &TemplateConfig::default());
        let expected = "\
// Generated by xkbgen (YAML→XKB config).
xkb_keymap {
  xkb_keycodes  { include \"evdev\" };
  xkb_types     { include \"complete\" };
  xkb_compat    { include \"complete\" };
  xkb_symbols   {
    // Prologue literals.
    name[Group1] = \"Test\";

    include \"pc\"
    // Keys.
    replace key <SPCE> {
      type = \"ONE_LEVEL\",
      symbols[Group1] = [
        U0020 // SPACE
      ]
    };
    // Epilogue literals.
    modifier_map Shift { <LFSH> };
  };
};
";
        assert_eq!(keymap, expected);
    }

    #[test]
    fn geometry_is_optional() {
        let template = TemplateConfig {
            geometry: Some("pc(pc105)".to_string()),
            ..TemplateConfig::default()
        };
        let keymap = render_keymap(&[], &Literals::default(), &template);
        assert!(keymap.contains("  xkb_geometry  { include \"pc(pc105)\" };\n};\n"));
        let keymap = render_keymap(&[], &Literals::default(), &TemplateConfig::default());
        assert!(!keymap.contains("xkb_geometry"));
    }
}
