//! Markdown → block model for assistant replies.
//!
//! The assistant answers in a small Markdown dialect (bold recipe titles,
//! `###` subheadings, numbered and bulleted lists, links). Parsing is kept
//! separate from egui so the block model can be tested without a context.

use egui::{self, RichText};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use crate::theme::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    ListItem { depth: usize, marker: String, spans: Vec<Span> },
    CodeBlock(String),
    Rule,
}

enum Pending {
    Paragraph,
    Heading(u8),
    Item { depth: usize, marker: String },
}

struct BlockBuilder {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    pending: Pending,
    strong: usize,
    emphasis: usize,
    link: Option<String>,
    /// Next ordinal per open list; `None` for bullet lists
    lists: Vec<Option<u64>>,
    code: Option<String>,
}

impl BlockBuilder {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            spans: Vec::new(),
            pending: Pending::Paragraph,
            strong: 0,
            emphasis: 0,
            link: None,
            lists: Vec::new(),
            code: None,
        }
    }

    fn style(&self, code: bool) -> SpanStyle {
        SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            code,
            link: self.link.clone(),
        }
    }

    fn push_text(&mut self, text: &str, code: bool) {
        if let Some(buf) = self.code.as_mut() {
            buf.push_str(text);
            return;
        }
        let style = self.style(code);
        // Merge with the previous span when the style is unchanged
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span { text: text.to_string(), style });
    }

    fn flush(&mut self) {
        let pending = std::mem::replace(&mut self.pending, Pending::Paragraph);
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        self.blocks.push(match pending {
            Pending::Paragraph => Block::Paragraph(spans),
            Pending::Heading(level) => Block::Heading { level, spans },
            Pending::Item { depth, marker } => Block::ListItem { depth, marker, spans },
        });
    }

    fn start_item(&mut self) {
        self.flush();
        let depth = self.lists.len().saturating_sub(1);
        let marker = match self.lists.last_mut() {
            Some(Some(n)) => {
                let marker = format!("{}.", n);
                *n += 1;
                marker
            }
            _ => "•".to_string(),
        };
        self.pending = Pending::Item { depth, marker };
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    // A paragraph directly inside a list item belongs to it
                    if !matches!(self.pending, Pending::Item { .. }) || !self.spans.is_empty() {
                        self.flush();
                    }
                }
                Tag::Heading { level, .. } => {
                    self.flush();
                    self.pending = Pending::Heading(heading_level(level));
                }
                Tag::List(start) => {
                    self.flush();
                    self.lists.push(start);
                }
                Tag::Item => self.start_item(),
                Tag::Strong => self.strong += 1,
                Tag::Emphasis => self.emphasis += 1,
                Tag::Link { dest_url, .. } => self.link = Some(dest_url.to_string()),
                Tag::CodeBlock(_) => {
                    self.flush();
                    self.code = Some(String::new());
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => {
                    if !matches!(self.pending, Pending::Item { .. }) {
                        self.flush();
                    }
                }
                TagEnd::Heading(_) | TagEnd::Item => self.flush(),
                TagEnd::List(_) => {
                    self.flush();
                    self.lists.pop();
                }
                TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
                TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
                TagEnd::Link => self.link = None,
                TagEnd::CodeBlock => {
                    if let Some(code) = self.code.take() {
                        self.blocks.push(Block::CodeBlock(code.trim_end().to_string()));
                    }
                }
                _ => {}
            },
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                self.push_text(&text, false)
            }
            Event::Code(text) => self.push_text(&text, true),
            Event::SoftBreak => self.push_text(" ", false),
            Event::HardBreak => self.push_text("\n", false),
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Parse Markdown into display blocks.
pub fn parse_markdown(source: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for event in Parser::new(source) {
        builder.handle(event);
    }
    builder.finish()
}

// ─── Rendering ───────────────────────────────────────────────

pub fn render_markdown(ui: &mut egui::Ui, source: &str) {
    for block in parse_markdown(source) {
        match block {
            Block::Heading { level, spans } => {
                let size = match level {
                    1 => 20.0,
                    2 => 18.0,
                    _ => 16.0,
                };
                ui.add_space(4.0);
                render_spans(ui, &spans, Some(size));
            }
            Block::Paragraph(spans) => render_spans(ui, &spans, None),
            Block::ListItem { depth, marker, spans } => {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(12.0 * depth as f32);
                    ui.label(RichText::new(marker).color(TEXT_SECONDARY));
                    render_inline(ui, &spans, None);
                });
            }
            Block::CodeBlock(code) => {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(code).monospace().color(TEXT_PRIMARY));
                    });
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

fn render_spans(ui: &mut egui::Ui, spans: &[Span], size: Option<f32>) {
    ui.horizontal_wrapped(|ui| render_inline(ui, spans, size));
}

fn render_inline(ui: &mut egui::Ui, spans: &[Span], size: Option<f32>) {
    ui.spacing_mut().item_spacing.x = 0.0;
    for span in spans {
        let mut text = RichText::new(&span.text).color(TEXT_PRIMARY);
        if let Some(size) = size {
            text = text.size(size).strong();
        }
        if span.style.strong {
            text = text.strong();
        }
        if span.style.emphasis {
            text = text.italics();
        }
        if span.style.code {
            text = text.code();
        }
        match &span.style.link {
            Some(url) => {
                ui.hyperlink_to(text.color(ACCENT), url);
            }
            None => {
                ui.label(text);
            }
        }
    }
}
