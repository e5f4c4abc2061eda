//! Flat-file persistence for the layout set and mapping table.
//!
//! The format is line oriented: repeating `[[layouts]]` blocks with nested
//! `[[layouts.zones]]` sub-blocks, followed by `[[mappings]]` blocks.
//! Loading is tolerant by design: unparseable lines are skipped and blocks
//! with empty names are discarded at block boundaries, so a hand-edited
//! file can never take the whole layout set down.
use std::fmt::Write as _;
use std::path::Path;

use crate::errors::Result;
use crate::models::{Layout, LayoutMapping, SpacingPolicy, Zone};

/// Write layouts and mappings to `path`, overwriting it.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn save(path: &Path, layouts: &[Layout], mappings: &[LayoutMapping]) -> Result<()> {
    let mut out = String::new();

    for layout in layouts {
        let _ = writeln!(out, "[[layouts]]");
        let _ = writeln!(out, "name = \"{}\"", layout.name);
        match layout.spacing {
            SpacingPolicy::Uniform(gap) => {
                let _ = writeln!(out, "gap = {gap}");
            }
            SpacingPolicy::HalfGap(h, v) => {
                let _ = writeln!(out, "spacing_h = {h}");
                let _ = writeln!(out, "spacing_v = {v}");
            }
        }
        if let Some(hotkey) = &layout.hotkey {
            let _ = writeln!(out, "hotkey = \"{hotkey}\"");
        }
        if let Some(template) = &layout.template {
            let _ = writeln!(out, "template = \"{template}\"");
        }
        if layout.columns > 0 {
            let _ = writeln!(out, "columns = {}", layout.columns);
        }
        if layout.rows > 0 {
            let _ = writeln!(out, "rows = {}", layout.rows);
        }

        for zone in &layout.zones {
            let _ = writeln!(out, "\n[[layouts.zones]]");
            let _ = writeln!(out, "name = \"{}\"", zone.name);
            let _ = writeln!(out, "x = {}", zone.x);
            let _ = writeln!(out, "y = {}", zone.y);
            let _ = writeln!(out, "width = {}", zone.width);
            let _ = writeln!(out, "height = {}", zone.height);
        }

        out.push('\n');
    }

    if !mappings.is_empty() {
        let _ = writeln!(out, "# Monitor/Workspace to Layout mappings");
        for mapping in mappings {
            let _ = writeln!(out, "[[mappings]]");
            let _ = writeln!(out, "monitor = \"{}\"", mapping.monitor);
            let _ = writeln!(out, "workspaces = \"{}\"", mapping.workspaces);
            let _ = writeln!(out, "layout = \"{}\"", mapping.layout);
            out.push('\n');
        }
    }

    std::fs::write(path, out)?;
    Ok(())
}

/// Read layouts and mappings back from `path`. A missing or unreadable
/// file yields an empty result, never an error.
#[must_use]
pub fn load(path: &Path) -> (Vec<Layout>, Vec<LayoutMapping>) {
    let Ok(text) = std::fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "no layout file to load");
        return (Vec::new(), Vec::new());
    };

    let mut loader = Loader::default();
    for line in text.lines() {
        loader.line(line.trim());
    }
    loader.finish()
}

#[derive(Default)]
enum Section {
    #[default]
    None,
    Layout,
    Zone,
    Mapping,
}

#[derive(Default)]
struct Loader {
    section: Section,
    layouts: Vec<Layout>,
    mappings: Vec<LayoutMapping>,
    layout: Layout,
    zone: Zone,
    mapping: LayoutMapping,
}

impl Loader {
    fn line(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        match line {
            "[[layouts]]" => {
                self.commit_block();
                self.section = Section::Layout;
                self.layout = Layout::default();
            }
            "[[layouts.zones]]" => {
                self.commit_zone();
                self.section = Section::Zone;
                self.zone = Zone::default();
            }
            "[[mappings]]" => {
                self.commit_block();
                self.section = Section::Mapping;
                self.mapping = LayoutMapping {
                    workspaces: "*".to_owned(),
                    ..LayoutMapping::default()
                };
            }
            _ if line.starts_with("[[") => {
                // Unknown section, skip its body.
                self.commit_block();
                self.section = Section::None;
            }
            _ => self.key_value(line),
        }
    }

    fn key_value(&mut self, line: &str) {
        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        let key = key.trim();
        let value = value.trim();

        match self.section {
            Section::Zone => match key {
                "name" => self.zone.name = unquote(value),
                "x" => parse_into(value, &mut self.zone.x),
                "y" => parse_into(value, &mut self.zone.y),
                "width" => parse_into(value, &mut self.zone.width),
                "height" => parse_into(value, &mut self.zone.height),
                _ => {}
            },
            Section::Layout => match key {
                "name" => self.layout.name = unquote(value),
                "hotkey" => self.layout.hotkey = Some(unquote(value)),
                "template" => self.layout.template = Some(unquote(value)),
                "columns" => parse_into(value, &mut self.layout.columns),
                "rows" => parse_into(value, &mut self.layout.rows),
                "gap" => {
                    if let Ok(gap) = value.parse() {
                        self.layout.spacing = SpacingPolicy::Uniform(gap);
                    }
                }
                "spacing_h" => {
                    if let Ok(h) = value.parse() {
                        let v = match self.layout.spacing {
                            SpacingPolicy::HalfGap(_, v) => v,
                            SpacingPolicy::Uniform(_) => 0,
                        };
                        self.layout.spacing = SpacingPolicy::HalfGap(h, v);
                    }
                }
                "spacing_v" => {
                    if let Ok(v) = value.parse() {
                        let h = match self.layout.spacing {
                            SpacingPolicy::HalfGap(h, _) => h,
                            SpacingPolicy::Uniform(_) => 0,
                        };
                        self.layout.spacing = SpacingPolicy::HalfGap(h, v);
                    }
                }
                _ => {}
            },
            Section::Mapping => match key {
                "monitor" => self.mapping.monitor = unquote(value),
                "workspaces" => self.mapping.workspaces = unquote(value),
                "layout" => self.mapping.layout = unquote(value),
                _ => {}
            },
            Section::None => {}
        }
    }

    fn commit_zone(&mut self) {
        if matches!(self.section, Section::Zone) && !self.zone.name.is_empty() {
            let mut zone = std::mem::take(&mut self.zone);
            zone.index = self.layout.zones.len();
            self.layout.zones.push(zone);
        }
        self.zone = Zone::default();
    }

    fn commit_block(&mut self) {
        match self.section {
            Section::Layout | Section::Zone => {
                self.commit_zone();
                let layout = std::mem::take(&mut self.layout);
                if layout.name.is_empty() {
                    tracing::debug!("discarding layout block without a name");
                } else {
                    self.layouts.push(layout);
                }
            }
            Section::Mapping => {
                let mapping = std::mem::take(&mut self.mapping);
                if !mapping.layout.is_empty() {
                    self.mappings.push(mapping);
                }
            }
            Section::None => {}
        }
    }

    fn finish(mut self) -> (Vec<Layout>, Vec<LayoutMapping>) {
        self.commit_block();
        (self.layouts, self.mappings)
    }
}

fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_owned()
}

fn parse_into<T: std::str::FromStr>(value: &str, slot: &mut T) {
    if let Ok(parsed) = value.parse() {
        *slot = parsed;
    }
}
