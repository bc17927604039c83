// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran deux lignes : "précédent opération" / "courant"
// - Pavé 4 colonnes, AC et = sur deux cases :
//     AC AC DEL /
//     1  2  3   *
//     4  5  6   +
//     7  8  9   -
//     .  0  =   =
// - La vue ne calcule ni ne formate : elle lit AppCalc::affichage() et dispatch.

use eframe::egui;

use super::clavier::action_pour_texte;
use super::etat::AppCalc;
use crate::noyau::Action;

const TOUCHE: egui::Vec2 = egui::vec2(72.0, 64.0);
const ESPACE: f32 = 4.0;
const TAILLE_TEXTE_TOUCHE: f32 = 24.0;

#[derive(Clone, Copy, Debug)]
struct Touche {
    libelle: &'static str,
    large: bool,
}

const fn t(libelle: &'static str) -> Touche {
    Touche {
        libelle,
        large: false,
    }
}

const fn large(libelle: &'static str) -> Touche {
    Touche {
        libelle,
        large: true,
    }
}

const PAVE: &[&[Touche]] = &[
    &[large("AC"), t("DEL"), t("/")],
    &[t("1"), t("2"), t("3"), t("*")],
    &[t("4"), t("5"), t("6"), t("+")],
    &[t("7"), t("8"), t("9"), t("-")],
    &[t("."), t("0"), large("=")],
];

/// Libellé de touche -> Action (AC/DEL en clair, le reste comme au clavier).
fn action_touche(libelle: &str) -> Option<Action> {
    match libelle {
        "AC" => Some(Action::Effacer),
        "DEL" => Some(Action::SupprimerChiffre),
        autre => action_pour_texte(autre),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        let largeur = 4.0 * TOUCHE.x + 3.0 * ESPACE;

        ui.vertical_centered(|ui| {
            ui.set_max_width(largeur);
            self.ui_ecran(ui, largeur);
            ui.add_space(ESPACE);
            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui, largeur: f32) {
        let a = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(largeur);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(a.ligne_precedente())
                            .monospace()
                            .size(18.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(a.ligne_courante())
                            .monospace()
                            .size(36.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for rangee in PAVE {
            ui.horizontal(|ui| {
                for touche in *rangee {
                    self.bouton(ui, *touche);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let taille = if touche.large {
            egui::vec2(2.0 * TOUCHE.x + ESPACE, TOUCHE.y)
        } else {
            TOUCHE
        };

        let texte = egui::RichText::new(touche.libelle).size(TAILLE_TEXTE_TOUCHE);
        let resp = ui.add_sized(taille, egui::Button::new(texte));

        if resp.clicked() {
            if let Some(action) = action_touche(touche.libelle) {
                self.dispatch(action);
            }
        }
    }
}
