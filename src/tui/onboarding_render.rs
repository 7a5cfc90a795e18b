//! Onboarding Wizard Rendering
//!
//! Render functions for each view of the onboarding wizard. Rendering reads
//! the wizard state and never changes it.

use super::form::{FieldKey, FieldKind, option_label};
use super::onboarding::{OnboardingWizard, SummaryButton, WizardStage, WizardStep};
use crate::utils::truncate_to_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main color palette
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ACCENT_DIM: Color = Color::Rgb(6, 95, 70);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BORDER: Color = Color::Rgb(63, 63, 70);

const CARD_WIDTH: u16 = 64;
const MASK_CAP: usize = 30;

/// Width available for a field value inside the card
const VALUE_WIDTH: usize = CARD_WIDTH as usize - 8;

const FEATURES: &[(&str, &str)] = &[
    ("💰", "Smart Deal Pricing"),
    ("🎯", "Auto Targeting"),
    ("📊", "Analytics"),
];

/// Render the entire onboarding screen
pub fn render_onboarding(f: &mut Frame, wizard: &OnboardingWizard) {
    let area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(f, rows[0]);
    render_footer(f, rows[2]);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let title = match wizard.stage() {
        WizardStage::Step(step) => {
            render_step_indicator(&mut lines, step);
            lines.push(Line::from(""));
            match step {
                WizardStep::ApiSetup => render_api_setup(&mut lines, wizard),
                WizardStep::BrandInfo => render_brand_info(&mut lines, wizard),
                WizardStep::Socials => render_socials(&mut lines, wizard),
            }
            render_navigation(&mut lines, step);
            format!(" Moltbot Setup ({}/{}) ", step.number(), WizardStep::total())
        }
        WizardStage::Complete => {
            render_complete(&mut lines, wizard);
            " Moltbot Setup Complete ".to_string()
        }
    };

    let main = rows[1];
    let show_features = !wizard.is_complete();
    let inner_width = CARD_WIDTH.min(main.width).saturating_sub(2).max(1) as usize;
    let wrapped_rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(inner_width))
        .sum();
    let card_height = u16::try_from(wrapped_rows).unwrap_or(u16::MAX).saturating_add(2);
    let features_height = if show_features { 4 } else { 0 };

    // Center the card (and feature strip) in the main area
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(card_height.min(main.height)),
            Constraint::Length(features_height.min(main.height.saturating_sub(card_height))),
            Constraint::Min(0),
        ])
        .split(main);

    let card_area = center_horizontally(v_chunks[1], CARD_WIDTH);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER))
                .title(Span::styled(
                    title,
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, card_area);

    if show_features && v_chunks[2].height > 0 {
        render_features(f, center_horizontally(v_chunks[2], CARD_WIDTH));
    }
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    h_chunks[1]
}

fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" 🤖 "),
        Span::styled(
            "Moltbot Negotiator",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Deals Wingman Pro", Style::default().fg(MUTED)),
    ]);
    let badge = Line::from(vec![
        Span::styled("Hostinger VPS Powered  ", Style::default().fg(MUTED)),
        Span::styled(
            " Premium ",
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(inner);
    f.render_widget(Paragraph::new(line), cols[0]);
    f.render_widget(Paragraph::new(badge).alignment(Alignment::Right), cols[1]);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" Ctrl+C ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("Quit", Style::default().fg(MUTED)),
        Span::styled("    Ship & Vibe in Public 🚀 ", Style::default().fg(MUTED)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn render_features(f: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((icon, label), col) in FEATURES.iter().zip(cols.iter()) {
        let tile = Paragraph::new(vec![
            Line::from(icon.to_string()),
            Line::from(Span::styled(label.to_string(), Style::default().fg(MUTED))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER)),
        );
        f.render_widget(tile, *col);
    }
}

/// Step indicator: filled for done, highlighted for current, hollow for pending
fn render_step_indicator(lines: &mut Vec<Line<'static>>, current: WizardStep) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for step in WizardStep::ALL {
        let (marker, marker_style, label_style) = if step == current {
            (
                format!("({})", step.number()),
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else if step.number() < current.number() {
            (
                format!("({})", step.number()),
                Style::default().fg(Color::White).bg(ACCENT_DIM),
                Style::default().fg(MUTED),
            )
        } else {
            (
                format!("({})", step.number()),
                Style::default().fg(MUTED),
                Style::default().fg(MUTED),
            )
        };
        spans.push(Span::styled(marker, marker_style));
        spans.push(Span::styled(format!(" {}", step.label()), label_style));
        if step.next().is_some() {
            spans.push(Span::styled(" ── ", Style::default().fg(BORDER)));
        }
    }
    lines.push(Line::from(spans));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(format!(" {}  ", current.icon())),
        Span::styled(current.subtitle().to_string(), Style::default().fg(MUTED)),
    ]));
}

// --- Individual step renderers ---
// All functions produce Vec<Line<'static>> by using owned strings throughout.

fn render_api_setup(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    render_fields(lines, wizard, WizardStep::ApiSetup);
    lines.push(Line::from(Span::styled(
        "  🔒 Your API key is stored locally and never sent to our servers",
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    )));
}

fn render_brand_info(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    render_fields(lines, wizard, WizardStep::BrandInfo);
}

fn render_socials(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    render_fields(lines, wizard, WizardStep::Socials);
}

fn render_fields(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard, step: WizardStep) {
    let focused = wizard.focused_key();
    for key in step.fields() {
        render_field(lines, *key, wizard.field(*key), focused == Some(*key));
    }
}

fn render_field(lines: &mut Vec<Line<'static>>, key: FieldKey, value: &str, focused: bool) {
    let label_style = Style::default().fg(if focused { ACCENT } else { MUTED });
    let prefix = if focused { " > " } else { "   " };
    lines.push(Line::from(vec![
        Span::styled(prefix, Style::default().fg(ACCENT)),
        Span::styled(key.label().to_string(), label_style),
    ]));

    let value_style = Style::default().fg(if focused { Color::White } else { Color::Gray });
    let placeholder_style = Style::default().fg(BORDER).add_modifier(Modifier::ITALIC);
    let cursor = if focused { "_" } else { "" };

    match key.kind() {
        FieldKind::Select(options) => {
            // Values set outside the option list are shown verbatim
            let label = option_label(options, value).unwrap_or(value).to_string();
            let arrows = Style::default().fg(if focused { ACCENT } else { BORDER });
            lines.push(Line::from(vec![
                Span::styled("     ◀ ", arrows),
                Span::styled(label, value_style.add_modifier(Modifier::BOLD)),
                Span::styled(" ▶", arrows),
            ]));
        }
        FieldKind::Masked => {
            let shown = if value.is_empty() {
                Span::styled(placeholder(key), placeholder_style)
            } else {
                Span::styled("*".repeat(value.chars().count().min(MASK_CAP)), value_style)
            };
            lines.push(Line::from(vec![
                Span::raw("     "),
                shown,
                Span::styled(cursor, value_style),
            ]));
        }
        FieldKind::Multiline => {
            if value.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw("     "),
                    Span::styled(placeholder(key), placeholder_style),
                    Span::styled(cursor, value_style),
                ]));
            } else {
                let mut rows = value.split('\n').peekable();
                while let Some(row) = rows.next() {
                    let tail = if rows.peek().is_none() { cursor } else { "" };
                    lines.push(Line::from(vec![
                        Span::raw("     "),
                        Span::styled(truncate_to_width(row, VALUE_WIDTH).to_string(), value_style),
                        Span::styled(tail, value_style),
                    ]));
                }
            }
        }
        FieldKind::Text | FieldKind::Handle => {
            let at = if key.kind() == FieldKind::Handle { "@" } else { "" };
            let shown = if value.is_empty() {
                Span::styled(placeholder(key), placeholder_style)
            } else {
                Span::styled(truncate_to_width(value, VALUE_WIDTH).to_string(), value_style)
            };
            lines.push(Line::from(vec![
                Span::raw("     "),
                Span::styled(at, Style::default().fg(MUTED)),
                shown,
                Span::styled(cursor, value_style),
            ]));
        }
    }
    lines.push(Line::from(""));
}

fn placeholder(key: FieldKey) -> String {
    key.placeholder().unwrap_or_default().to_string()
}

fn render_navigation(lines: &mut Vec<Line<'static>>, step: WizardStep) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    // No way back from the first step
    if step.prev().is_some() {
        spans.push(Span::styled(
            "[Esc] ",
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("← Back   ", Style::default().fg(Color::White)));
    }

    spans.push(Span::styled(
        "[Tab] ",
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("Next Field   ", Style::default().fg(Color::White)));

    spans.push(Span::styled(
        "[Enter] ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    let continue_label = if step.next().is_some() {
        "Continue →"
    } else {
        "Complete Setup ✓"
    };
    spans.push(Span::styled(
        continue_label,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));

    lines.push(Line::from(spans));
}

fn render_complete(lines: &mut Vec<Line<'static>>, wizard: &OnboardingWizard) {
    let summary = wizard.summary();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::raw("🚀")).alignment(Alignment::Center));
    lines.push(
        Line::from(Span::styled(
            "Moltbot Activated!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!(
                "Your Deals Wingman is now configured and ready to negotiate on behalf of {}.",
                summary.headline_brand()
            ),
            Style::default().fg(MUTED),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Configuration Summary",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));

    let rows: [(&str, String, Color); 4] = [
        ("AI Provider:", summary.provider_display(), Color::White),
        ("Brand:", summary.brand_display().to_string(), Color::White),
        ("Voice:", summary.voice_display(), Color::White),
        ("Socials Connected:", summary.socials_display(), ACCENT),
    ];
    for (label, value, color) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<20}", label), Style::default().fg(MUTED)),
            Span::styled(
                truncate_to_width(&value, VALUE_WIDTH - 20).to_string(),
                Style::default().fg(color),
            ),
        ]));
    }
    lines.push(Line::from(""));

    let mut buttons: Vec<Span<'static>> = Vec::new();
    for button in [SummaryButton::EditConfiguration, SummaryButton::LaunchDashboard] {
        let selected = wizard.summary_button == button;
        let style = if selected {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(BORDER)
        };
        buttons.push(Span::styled(format!(" {} ", button.label()), style));
        buttons.push(Span::raw("   "));
    }
    buttons.pop();
    lines.push(Line::from(buttons).alignment(Alignment::Center));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "[←/→] Choose   [Enter] Select   [E] Edit   [Q] Quit",
            Style::default().fg(MUTED),
        ))
        .alignment(Alignment::Center),
    );
}
