// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier et clics arrivent au même point : AppCalc::dispatch.
// Une action est traitée jusqu’au bout avant la suivante (ordre = file d’événements egui).

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Les événements reconnus sont CONSOMMÉS : aucun widget ne les revoit
        // (équivalent du preventDefault sur "/" et "=" côté navigateur).
        let actions: Vec<Action> = ctx.input_mut(|i| {
            let mut actions = Vec::new();
            i.events.retain(|ev| match clavier::action_pour_evenement(ev) {
                Some(a) => {
                    actions.push(a);
                    false
                }
                None => true,
            });
            actions
        });

        for a in actions {
            self.dispatch(a);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
