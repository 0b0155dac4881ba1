//! Stage controller for the guided comfort check.
//!
//! Consumes one [`UserAction`] at a time, mutates the session through its
//! validated methods, and emits [`RenderInstruction`]s for the
//! presentation boundary. All copy the user sees originates here; the
//! boundary only displays.
//!
//! Two failure shapes, both non-fatal: a validation failure at the
//! current stage produces a re-prompt message and leaves the session
//! untouched; an action that does not belong to the current stage is
//! ignored entirely (empty instruction list).

use super::action::{
    ConfidenceFeeling, FinalAction, LoanFollowUp, ProfileAnswer, QuickAction, UserAction,
};
use super::render::{AgentMessage, OptionSpec, Panel, QuestionSpec, RenderInstruction, SliderSpec};
use super::session::AssessmentSession;
use super::stage::AssessmentStage;
use crate::domain::estimator::assumptions::{
    DIP_MAX_PERCENT, DIP_MIN_PERCENT, DIP_STEP_PERCENT, EMI_SLIDER_DEFAULT, EMI_SLIDER_MAX,
    EMI_SLIDER_MIN, EMI_SLIDER_STEP,
};
use crate::domain::estimator::{
    build_loan_variants, estimate_eligibility_band, simulate_income_dip, DipOutcome, DipPercent,
};
use crate::domain::foundation::{ErrorCode, Money};
use crate::domain::profile::{IncomeStability, RiskComfort, SavingsBuffer};

const DEFAULT_PERSONA: &str = "Rupa";

const INITIAL_INPUTS_HEADER: &str = "Tell me a bit about this home";
const PROFILE_HEADER: &str = "Tell me about your financial pattern";
const LOAN_OPTIONS_HEADER: &str = "Loan options that fit your current plan";
const STRESS_HEADER: &str = "Income dip – what if your income drops?";
const CONFIDENCE_HEADER: &str = "How are you feeling about this?";
const FINAL_HEADER: &str = "What would you like to do next?";

const INITIAL_REPROMPT: &str = "Could you share both an approximate property value and your \
monthly take‑home income? This helps me give you a meaningful early estimate.";

const PROFILE_REPROMPT: &str =
    "Tap one option in each of the three questions so I can reflect your profile accurately.";

const SCENARIO_ROADMAP: &str = "In this early version, we start with income dip as the core \
scenario. More scenarios like rate changes and expense shifts can be added later.";

const STRESS_LEGAL: &str = "These are simplified illustrations to help you think about comfort \
levels. They are not financial advice or approval decisions.";

const FINAL_NOTE: &str = "A relationship manager can help you review this in more detail and \
walk you through documents, eligibility checks and next steps.";

/// Drives the assessment flow: one action in, render instructions out.
#[derive(Debug, Clone)]
pub struct StageController {
    persona: String,
}

impl Default for StageController {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}

impl StageController {
    /// Creates a controller with the given assistant persona name.
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
        }
    }

    /// The assistant persona name used in the introduction and meta line.
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Processes one user action against the session.
    ///
    /// Never fails: invalid inputs re-prompt, actions foreign to the
    /// current stage yield no instructions, and the session is only ever
    /// mutated through its validated methods.
    pub fn apply(
        &self,
        session: &mut AssessmentSession,
        action: UserAction,
    ) -> Vec<RenderInstruction> {
        match action {
            UserAction::Start => self.start(session),
            UserAction::SubmitInitialInputs {
                property_value,
                monthly_income,
                preferred_emi,
            } => self.submit_initial_inputs(session, property_value, monthly_income, preferred_emi),
            UserAction::SkipEmiPreference {
                property_value,
                monthly_income,
            } => self.submit_initial_inputs(session, property_value, monthly_income, None),
            UserAction::SelectQuickAction(choice) => self.select_quick_action(session, choice),
            UserAction::SelectProfileAnswer(answer) => Self::select_profile_answer(session, answer),
            UserAction::SubmitProfile => self.submit_profile(session),
            UserAction::SelectLoanFollowUp(choice) => self.select_loan_follow_up(session, choice),
            UserAction::SetDipPercent { percent } => Self::set_dip_percent(session, percent),
            UserAction::RequestAnotherScenario => Self::request_another_scenario(session),
            UserAction::RequestConfidenceCheck => Self::request_confidence_check(session),
            UserAction::SelectConfidenceFeeling(feeling) => {
                Self::select_confidence_feeling(session, feeling)
            }
            UserAction::SelectFinalAction(choice) => Self::select_final_action(session, choice),
            UserAction::Close => Vec::new(),
        }
    }

    fn start(&self, session: &mut AssessmentSession) -> Vec<RenderInstruction> {
        if session.begin().is_err() {
            return Vec::new();
        }
        let intro = format!(
            "Hey, I’m {} 👋 I’m here to help you with your loan requirements — because your \
financial security matters to us. Let’s quickly understand what you’re planning so I can guide \
you better.",
            self.persona
        );
        vec![
            RenderInstruction::Agent(
                AgentMessage::text(intro)
                    .with_meta(format!("{} • Future Stability Check", self.persona)),
            ),
            RenderInstruction::Panel(Panel::InitialInputs {
                header: INITIAL_INPUTS_HEADER.to_string(),
                emi_slider: SliderSpec {
                    min: EMI_SLIDER_MIN,
                    max: EMI_SLIDER_MAX,
                    step: EMI_SLIDER_STEP,
                    value: EMI_SLIDER_DEFAULT,
                },
            }),
        ]
    }

    fn submit_initial_inputs(
        &self,
        session: &mut AssessmentSession,
        property_value: f64,
        monthly_income: f64,
        preferred_emi: Option<f64>,
    ) -> Vec<RenderInstruction> {
        match session.record_initial_inputs(property_value, monthly_income, preferred_emi) {
            Ok(()) => {}
            Err(err) if err.code == ErrorCode::MissingRequiredInput => {
                return vec![RenderInstruction::Agent(AgentMessage::text(
                    INITIAL_REPROMPT,
                ))];
            }
            Err(_) => return Vec::new(),
        }

        let band = estimate_eligibility_band(
            monthly_income,
            session.preferred_emi().map(|p| p.max.amount()),
        );
        session.set_eligibility(band);

        let preference_clause = session
            .preferred_emi()
            .map(|p| format!(", preferred EMI ~{}", p.preferred))
            .unwrap_or_default();
        let echo = format!(
            "Property ~{}, monthly take‑home ~{}{}.",
            Money::new(property_value),
            Money::new(monthly_income),
            preference_clause
        );

        vec![
            RenderInstruction::UserEcho { text: echo },
            RenderInstruction::Agent(
                AgentMessage::paragraphs([
                    format!(
                        "Based on what you’ve shared, you may be eligible for a home loan of \
approximately {} – {}.",
                        band.low, band.high
                    ),
                    "This is an early estimate and may change after detailed checks.".to_string(),
                ])
                .with_tag("Soft eligibility (illustrative)"),
            ),
            RenderInstruction::Panel(Panel::QuickActions {
                options: vec![QuickAction::FutureFinances, QuickAction::StressTest],
            }),
        ]
    }

    fn select_quick_action(
        &self,
        session: &mut AssessmentSession,
        choice: QuickAction,
    ) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::SoftEligibility {
            return Vec::new();
        }
        match choice {
            QuickAction::FutureFinances => {
                if session.begin_profile().is_err() {
                    return Vec::new();
                }
                vec![
                    RenderInstruction::UserEcho {
                        text: choice.label().to_string(),
                    },
                    RenderInstruction::Agent(
                        AgentMessage::text(
                            "To understand how stable this loan could feel over time, I’ll \
quickly ask about your income, savings and your comfort with risk.",
                        )
                        .with_tag("Predict my future finances"),
                    ),
                    RenderInstruction::Panel(Panel::ProfileQuestions {
                        header: PROFILE_HEADER.to_string(),
                        questions: Self::profile_questions(),
                    }),
                ]
            }
            QuickAction::StressTest => {
                let intro = AgentMessage::text(
                    "Let’s start with an income dip scenario. You’ll be able to see in plain \
language how your EMI might feel if your income temporarily falls.",
                )
                .with_tag("Stress testing (income dip)");
                Self::enter_stress_testing(
                    session,
                    RenderInstruction::UserEcho {
                        text: choice.label().to_string(),
                    },
                    intro,
                )
            }
        }
    }

    fn select_profile_answer(
        session: &mut AssessmentSession,
        answer: ProfileAnswer,
    ) -> Vec<RenderInstruction> {
        // Pill selection is reflected locally by the panel; the core only
        // records the value.
        let result = match answer {
            ProfileAnswer::IncomeStability(value) => session.answer_income_stability(value),
            ProfileAnswer::SavingsBuffer(value) => session.answer_savings_buffer(value),
            ProfileAnswer::RiskComfort(value) => session.answer_risk_comfort(value),
        };
        let _ = result;
        Vec::new()
    }

    fn submit_profile(&self, session: &mut AssessmentSession) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::FutureProfile {
            return Vec::new();
        }
        if !session.profile().is_complete() {
            return vec![RenderInstruction::Agent(AgentMessage::text(
                PROFILE_REPROMPT,
            ))];
        }
        let (Some(band), Some(income)) = (session.eligibility().copied(), session.monthly_income())
        else {
            return Vec::new();
        };
        let score = session.profile().score().unwrap_or(0);
        let variants = build_loan_variants(band.reference_emi.amount(), income.amount(), score);
        if session.complete_profile(variants.clone()).is_err() {
            return Vec::new();
        }

        vec![
            RenderInstruction::UserEcho {
                text: "Shared my income pattern, savings buffer and risk comfort.".to_string(),
            },
            RenderInstruction::Agent(AgentMessage::text(
                "Here’s what I understand so far: your income predictability, savings buffer, \
and risk comfort will be used to guide suitable loan options.",
            )),
            RenderInstruction::Agent(
                AgentMessage::paragraphs([
                    "Here are some illustrative loan shapes that fit your current plan."
                        .to_string(),
                    "These are not offers or approvals, but examples to help you see the \
trade‑offs between comfort and speed of repayment."
                        .to_string(),
                ])
                .with_tag("Loan options (illustrative)"),
            ),
            RenderInstruction::Panel(Panel::LoanOptions {
                header: LOAN_OPTIONS_HEADER.to_string(),
                variants: variants.to_vec(),
                follow_ups: vec![LoanFollowUp::StressOptions, LoanFollowUp::CompareTradeOffs],
            }),
        ]
    }

    fn select_loan_follow_up(
        &self,
        session: &mut AssessmentSession,
        choice: LoanFollowUp,
    ) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::LoanOptions {
            return Vec::new();
        }
        match choice {
            LoanFollowUp::StressOptions => {
                let intro = AgentMessage::text(
                    "Let’s see how your EMIs might feel if your income dips for a while.",
                )
                .with_tag("Stress testing (income dip)");
                Self::enter_stress_testing(
                    session,
                    RenderInstruction::UserEcho {
                        text: choice.label().to_string(),
                    },
                    intro,
                )
            }
            LoanFollowUp::CompareTradeOffs => Self::explain_trade_offs(session),
        }
    }

    /// Read-only trade-off comparison; the stage does not change.
    fn explain_trade_offs(session: &AssessmentSession) -> Vec<RenderInstruction> {
        let Some(variants) = session.loan_variants() else {
            return Vec::new();
        };
        let [stable, balanced, stretched] = variants;
        vec![
            RenderInstruction::UserEcho {
                text: LoanFollowUp::CompareTradeOffs.label().to_string(),
            },
            RenderInstruction::Agent(
                AgentMessage::paragraphs([
                    format!(
                        "• Stable: Lower EMI ({}) and longer tenure keep more room each month \
for essentials, goals and emergencies.",
                        stable.emi
                    ),
                    format!(
                        "• Balanced: EMI ({}) is higher but still aims for a moderate comfort \
buffer, helping you close the loan sooner.",
                        balanced.emi
                    ),
                    format!(
                        "• Stretched: Highest EMI ({}) reduces tenure but can feel tight if \
income or expenses move unexpectedly.",
                        stretched.emi
                    ),
                    "You can stress test these options next to see how they behave if things \
change."
                        .to_string(),
                ])
                .with_tag("Comparing trade‑offs"),
            ),
        ]
    }

    fn enter_stress_testing(
        session: &mut AssessmentSession,
        echo: RenderInstruction,
        intro: AgentMessage,
    ) -> Vec<RenderInstruction> {
        if session.begin_stress_testing().is_err() {
            return Vec::new();
        }
        let Some(outcome) = Self::run_simulation(session, DipPercent::DEFAULT) else {
            return Vec::new();
        };
        vec![
            echo,
            RenderInstruction::Agent(intro),
            Self::stress_panel(outcome),
        ]
    }

    fn set_dip_percent(session: &mut AssessmentSession, percent: u8) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::StressTesting {
            return Vec::new();
        }
        // Values off the slider's range or step cannot occur through the
        // slider itself; ignore them rather than re-prompt.
        let Ok(dip) = DipPercent::try_new(percent) else {
            return Vec::new();
        };
        match Self::run_simulation(session, dip) {
            Some(outcome) => vec![Self::stress_panel(outcome)],
            None => Vec::new(),
        }
    }

    /// Simulates a dip against the session's current base EMI and stores
    /// the outcome on the session.
    fn run_simulation(session: &mut AssessmentSession, dip: DipPercent) -> Option<DipOutcome> {
        let income = session.monthly_income()?;
        let base_emi = session.stress_base_emi()?;
        let outcome = simulate_income_dip(
            income.amount(),
            dip,
            base_emi,
            session.profile().savings_buffer,
        );
        session.record_scenario(outcome.clone()).ok()?;
        Some(outcome)
    }

    fn stress_panel(outcome: DipOutcome) -> RenderInstruction {
        RenderInstruction::Panel(Panel::StressTest {
            header: STRESS_HEADER.to_string(),
            dip_slider: SliderSpec {
                min: f64::from(DIP_MIN_PERCENT),
                max: f64::from(DIP_MAX_PERCENT),
                step: f64::from(DIP_STEP_PERCENT),
                value: f64::from(outcome.dip_percent.value()),
            },
            outcome,
            legal: STRESS_LEGAL.to_string(),
        })
    }

    fn request_another_scenario(session: &AssessmentSession) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::StressTesting {
            return Vec::new();
        }
        vec![RenderInstruction::Agent(AgentMessage::text(
            SCENARIO_ROADMAP,
        ))]
    }

    fn request_confidence_check(session: &mut AssessmentSession) -> Vec<RenderInstruction> {
        if session.begin_confidence().is_err() {
            return Vec::new();
        }
        vec![
            RenderInstruction::Agent(
                AgentMessage::text(
                    "Based on everything you’ve seen so far, how does this loan feel to you?",
                )
                .with_tag("Confidence checkpoint"),
            ),
            RenderInstruction::Panel(Panel::ConfidenceOptions {
                header: CONFIDENCE_HEADER.to_string(),
                options: ConfidenceFeeling::options().to_vec(),
            }),
        ]
    }

    fn select_confidence_feeling(
        session: &mut AssessmentSession,
        feeling: ConfidenceFeeling,
    ) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::Confidence || session.begin_final().is_err() {
            return Vec::new();
        }
        let reply = match feeling {
            ConfidenceFeeling::Comfortable => {
                "I’m glad this feels comfortable. Your reflections on income, savings and stress \
scenarios suggest this loan shape could work for you, as long as you keep reviewing it when \
life changes."
            }
            ConfidenceFeeling::SlightlyRisky => {
                "Thank you for sharing that. It’s completely normal for a home loan to feel \
slightly risky. We could consider nudging towards the more stable EMI option or a slightly \
longer tenure to create extra breathing room."
            }
            ConfidenceFeeling::TooStressful => {
                "It’s important that your home loan doesn’t feel overwhelming. We can explore \
safer structures — like a lower EMI, longer tenure, or phasing the purchase timeline — so that \
your day‑to‑day life remains manageable."
            }
        };
        vec![
            RenderInstruction::UserEcho {
                text: feeling.label().to_string(),
            },
            RenderInstruction::Agent(AgentMessage::text(reply).with_tag("Your comfort matters")),
            RenderInstruction::Panel(Panel::FinalActions {
                header: FINAL_HEADER.to_string(),
                options: FinalAction::options().to_vec(),
                note: FINAL_NOTE.to_string(),
            }),
        ]
    }

    fn select_final_action(
        session: &AssessmentSession,
        choice: FinalAction,
    ) -> Vec<RenderInstruction> {
        if session.stage() != AssessmentStage::Final {
            return Vec::new();
        }
        let (reply, tag) = match choice {
            FinalAction::Proceed => (
                "Great. In the next step, we’ll move from this comfort check into a more \
detailed application journey where we look at documents and eligibility in depth.",
                "Next step",
            ),
            FinalAction::TalkToAdvisor => (
                "I’ll connect you with a relationship manager who can walk through your \
situation and help you fine‑tune the loan structure at your pace. There’s no pressure to \
decide immediately.",
                "Human support",
            ),
        };
        vec![
            RenderInstruction::UserEcho {
                text: choice.label().to_string(),
            },
            RenderInstruction::Agent(AgentMessage::text(reply).with_tag(tag)),
        ]
    }

    fn profile_questions() -> Vec<QuestionSpec> {
        vec![
            QuestionSpec {
                prompt: "How does your income usually behave?".to_string(),
                options: IncomeStability::options()
                    .iter()
                    .map(|o| OptionSpec {
                        value: o.tag().to_string(),
                        label: o.label().to_string(),
                    })
                    .collect(),
            },
            QuestionSpec {
                prompt: "If needed, how long could your savings support you?".to_string(),
                options: SavingsBuffer::options()
                    .iter()
                    .map(|o| OptionSpec {
                        value: o.tag().to_string(),
                        label: o.label().to_string(),
                    })
                    .collect(),
            },
            QuestionSpec {
                prompt: "How do you usually handle financial ups and downs?".to_string(),
                options: RiskComfort::options()
                    .iter()
                    .map(|o| OptionSpec {
                        value: o.tag().to_string(),
                        label: o.label().to_string(),
                    })
                    .collect(),
            },
        ]
    }
}
