//! Terminal renderer for the guided flow.
//!
//! Turns [`RenderInstruction`]s into plain text. All copy arrives
//! ready-made from the stage controller; this layer only lays it out.

use crate::domain::assessment::{Panel, RenderInstruction};

/// Renders instructions as plain terminal text.
#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a batch of instructions into one display block.
    pub fn render_all(&self, instructions: &[RenderInstruction]) -> String {
        instructions
            .iter()
            .map(|i| self.render(i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders a single instruction.
    pub fn render(&self, instruction: &RenderInstruction) -> String {
        match instruction {
            RenderInstruction::Agent(msg) => {
                let mut lines = Vec::new();
                if let Some(meta) = &msg.meta {
                    lines.push(format!("[{meta}]"));
                }
                if let Some(tag) = &msg.tag {
                    lines.push(format!("({tag})"));
                }
                for paragraph in &msg.paragraphs {
                    lines.push(paragraph.clone());
                }
                if let Some(subtext) = &msg.subtext {
                    lines.push(format!("  {subtext}"));
                }
                lines.join("\n")
            }
            RenderInstruction::UserEcho { text } => format!("> {text}"),
            RenderInstruction::Panel(panel) => self.render_panel(panel),
        }
    }

    fn render_panel(&self, panel: &Panel) -> String {
        let mut lines = Vec::new();
        match panel {
            Panel::InitialInputs { header, emi_slider } => {
                lines.push(format!("── {header} ──"));
                lines.push("Property value (approx.)".to_string());
                lines.push("Monthly take-home income".to_string());
                lines.push(format!(
                    "Preferred EMI (optional): {}–{} in steps of {}, currently {}",
                    emi_slider.min, emi_slider.max, emi_slider.step, emi_slider.value
                ));
            }
            Panel::QuickActions { options } => {
                for option in options {
                    lines.push(format!("  [{}]", option.label()));
                }
            }
            Panel::ProfileQuestions { header, questions } => {
                lines.push(format!("── {header} ──"));
                for question in questions {
                    lines.push(question.prompt.clone());
                    for option in &question.options {
                        lines.push(format!("  ({}) {}", option.value, option.label));
                    }
                }
            }
            Panel::LoanOptions {
                header,
                variants,
                follow_ups,
            } => {
                lines.push(format!("── {header} ──"));
                for variant in variants {
                    lines.push(format!(
                        "{} | EMI: {} | Tenure: {} years | Interest type: {} | Risk: {}",
                        variant.label.label(),
                        variant.emi,
                        variant.tenure_years,
                        variant.interest_type,
                        variant.risk_level.label()
                    ));
                    lines.push(format!("  {}", variant.comfort_note));
                }
                for follow_up in follow_ups {
                    lines.push(format!("  [{}]", follow_up.label()));
                }
            }
            Panel::StressTest {
                header,
                dip_slider,
                outcome,
                legal,
            } => {
                lines.push(format!("── {header} ──"));
                lines.push(format!(
                    "Income dip: {} ({}–{}% in steps of {})",
                    outcome.dip_percent, dip_slider.min, dip_slider.max, dip_slider.step
                ));
                lines.push(format!(
                    "Income after dip: {} • EMI around {}",
                    outcome.income_after_dip, outcome.base_emi
                ));
                lines.push(format!("[{}]", outcome.status_label()));
                lines.push(outcome.tone_text().to_string());
                lines.push(format!(
                    "Your savings could support you for {} if you maintained similar monthly \
spends.",
                    outcome.months_cover
                ));
                lines.push(format!("  {legal}"));
            }
            Panel::ConfidenceOptions { header, options } => {
                lines.push(format!("── {header} ──"));
                for option in options {
                    lines.push(format!("  [{}]", option.label()));
                }
            }
            Panel::FinalActions {
                header,
                options,
                note,
            } => {
                lines.push(format!("── {header} ──"));
                for option in options {
                    lines.push(format!("  [{}]", option.label()));
                }
                lines.push(format!("  {note}"));
            }
        }
        lines.join("\n")
    }
}
