//! Payment plan selection and history.

use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{ARROW_RIGHT, CHECK_CIRCLE, CREDIT_CARD};

use crate::models::PaymentPlan;
use crate::models::payment::{self, TOTAL_DUE_CENTS, format_amount};
use crate::state::{Action, AppState};

use super::components::{back_button, colors, panel_header, section};

/// Show the payment panel.
pub fn show(state: &AppState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    if back_button(ui, "Back to Upload Documents") {
        actions.push(Action::Back);
    }
    panel_header(ui, CREDIT_CARD, "Payment", "Choose your payment method");

    section(ui, "Payment Method", |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format_amount(TOTAL_DUE_CENTS)).size(28.0).strong());
            ui.label(RichText::new("Total Payment").weak());
        });
        ui.add_space(10.0);

        for plan in PaymentPlan::ALL {
            ui.horizontal(|ui| {
                if ui.radio(state.payment_plan == plan, plan.label()).clicked() {
                    actions.push(Action::SelectPaymentPlan(plan));
                }
                ui.label(RichText::new(plan.description()).small().weak());
            });
        }

        let plan = state.payment_plan;
        if plan.instalments() > 1 {
            ui.add_space(5.0);
            ui.label(format!(
                "{} payments of {}",
                plan.instalments(),
                format_amount(plan.instalment_cents())
            ));
        }

        ui.add_space(10.0);
        if ui.button(format!("Continue {ARROW_RIGHT}")).clicked() {
            actions.push(Action::ContinuePayment);
        }
        ui.label(RichText::new("No Interest, No Hidden Charges").small().color(colors::SUCCESS));
    });

    ui.add_space(10.0);

    section(ui, "Payment History", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(24.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(100.0))
            .header(20.0, |mut header| {
                header.col(|_| {});
                header.col(|ui| {
                    ui.strong("Payment");
                });
                header.col(|ui| {
                    ui.strong("Status");
                });
                header.col(|ui| {
                    ui.strong("Amount");
                });
            })
            .body(|mut body| {
                for record in payment::history() {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(CHECK_CIRCLE).color(colors::SUCCESS));
                        });
                        row.col(|ui| {
                            ui.label(&record.label);
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(record.status).weak());
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(format_amount(record.amount_cents)).strong());
                        });
                    });
                }
            });
    });

    actions
}
