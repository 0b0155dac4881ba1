//! Terminal front-end for the comfort check.
//!
//! Starts one session and drives it with short typed commands; all copy
//! and flow decisions come from the stage controller.

use std::sync::Arc;

use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use comfort_check::adapters::{InMemorySessionStore, TerminalRenderer};
use comfort_check::application::handlers::{
    ApplyActionCommand, ApplyActionHandler, StartAssessmentCommand, StartAssessmentHandler,
};
use comfort_check::config::AppConfig;
use comfort_check::domain::assessment::{
    ConfidenceFeeling, FinalAction, LoanFollowUp, ProfileAnswer, QuickAction, StageController,
    UserAction,
};
use comfort_check::domain::profile::{IncomeStability, RiskComfort, SavingsBuffer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().unwrap_or_default();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let store = Arc::new(InMemorySessionStore::new());
    let controller = StageController::new(config.persona.clone());
    let start_handler = StartAssessmentHandler::new(store.clone(), controller.clone());
    let apply_handler = ApplyActionHandler::new(store, controller);
    let renderer = TerminalRenderer::new();

    let started = start_handler.handle(StartAssessmentCommand).await?;
    let assessment_id = started.assessment_id;
    println!("{}", renderer.render_all(&started.instructions));
    print_help();

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "help" {
            print_help();
            continue;
        }
        if line == "quit" || line == "exit" {
            apply_handler
                .handle(ApplyActionCommand {
                    assessment_id,
                    action: UserAction::Close,
                })
                .await?;
            break;
        }

        let Some(action) = parse_action(line) else {
            println!("Unrecognised command — type 'help' for the list.");
            continue;
        };

        let result = apply_handler
            .handle(ApplyActionCommand {
                assessment_id,
                action,
            })
            .await?;
        if result.instructions.is_empty() {
            println!("(nothing happens at this point — type 'help' for the commands)");
        } else {
            println!("{}", renderer.render_all(&result.instructions));
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\nCommands:\n  \
submit <property> <income> [emi]   share your inputs (e.g. submit 7500000 85000 30000)\n  \
skip <property> <income>           share inputs without an EMI preference\n  \
future | stress                    pick a quick action after the estimate\n  \
income stable|slight|uncertain     answer the income question\n  \
savings lt3|3to6|gt6               answer the savings question\n  \
risk safety|some|risk              answer the risk question\n  \
continue                           submit the three answers\n  \
options-stress | compare           follow up on the loan options\n  \
dip <percent>                      move the income-dip slider (10-40, step 5)\n  \
another                            ask for a different scenario\n  \
confidence                         go to the confidence checkpoint\n  \
comfortable|risky|stressful        say how the loan feels\n  \
proceed | advisor                  choose your next step\n  \
quit                               leave the comfort check\n"
    );
}

fn parse_amount(token: &str) -> Option<f64> {
    token.replace(',', "").parse::<f64>().ok()
}

fn parse_action(line: &str) -> Option<UserAction> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;

    match command {
        "submit" => {
            let property_value = parse_amount(parts.next()?)?;
            let monthly_income = parse_amount(parts.next()?)?;
            let preferred_emi = parts.next().and_then(parse_amount);
            Some(UserAction::SubmitInitialInputs {
                property_value,
                monthly_income,
                preferred_emi,
            })
        }
        "skip" => {
            let property_value = parse_amount(parts.next()?)?;
            let monthly_income = parse_amount(parts.next()?)?;
            Some(UserAction::SkipEmiPreference {
                property_value,
                monthly_income,
            })
        }
        "future" => Some(UserAction::SelectQuickAction(QuickAction::FutureFinances)),
        "stress" => Some(UserAction::SelectQuickAction(QuickAction::StressTest)),
        "income" => {
            let value = match parts.next()? {
                "stable" => IncomeStability::Stable,
                "slight" => IncomeStability::Slight,
                "uncertain" => IncomeStability::Uncertain,
                _ => return None,
            };
            Some(UserAction::SelectProfileAnswer(
                ProfileAnswer::IncomeStability(value),
            ))
        }
        "savings" => {
            let value = match parts.next()? {
                "lt3" => SavingsBuffer::LessThanThree,
                "3to6" => SavingsBuffer::ThreeToSix,
                "gt6" => SavingsBuffer::MoreThanSix,
                _ => return None,
            };
            Some(UserAction::SelectProfileAnswer(ProfileAnswer::SavingsBuffer(
                value,
            )))
        }
        "risk" => {
            let value = match parts.next()? {
                "safety" => RiskComfort::Safety,
                "some" => RiskComfort::Some,
                "risk" => RiskComfort::Risk,
                _ => return None,
            };
            Some(UserAction::SelectProfileAnswer(ProfileAnswer::RiskComfort(
                value,
            )))
        }
        "continue" => Some(UserAction::SubmitProfile),
        "options-stress" => Some(UserAction::SelectLoanFollowUp(LoanFollowUp::StressOptions)),
        "compare" => Some(UserAction::SelectLoanFollowUp(LoanFollowUp::CompareTradeOffs)),
        "dip" => {
            let percent = parts.next()?.parse::<u8>().ok()?;
            Some(UserAction::SetDipPercent { percent })
        }
        "another" => Some(UserAction::RequestAnotherScenario),
        "confidence" => Some(UserAction::RequestConfidenceCheck),
        "comfortable" => Some(UserAction::SelectConfidenceFeeling(
            ConfidenceFeeling::Comfortable,
        )),
        "risky" => Some(UserAction::SelectConfidenceFeeling(
            ConfidenceFeeling::SlightlyRisky,
        )),
        "stressful" => Some(UserAction::SelectConfidenceFeeling(
            ConfidenceFeeling::TooStressful,
        )),
        "proceed" => Some(UserAction::SelectFinalAction(FinalAction::Proceed)),
        "advisor" => Some(UserAction::SelectFinalAction(FinalAction::TalkToAdvisor)),
        _ => None,
    }
}
