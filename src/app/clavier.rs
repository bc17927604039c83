// src/app/clavier.rs
//
// Table fixe clavier -> Action.
//
// Texte tapé (un caractère) :
//   0-9 .      -> AjouterChiffre
//   + - * /    -> ChoisirOperation
//   =          -> Evaluer
// Touches :
//   Enter      -> Evaluer
//   Backspace  -> Effacer (AC, pas DEL)
//   Delete     -> SupprimerChiffre
//
// Les opérateurs passent par Event::Text (et non Event::Key) : egui émet les deux
// pour "+", on ne veut qu’un seul dispatch.

use eframe::egui;

use crate::noyau::{Action, Chiffre, Operation};

pub fn action_pour_evenement(ev: &egui::Event) -> Option<Action> {
    match ev {
        egui::Event::Text(t) => action_pour_texte(t),
        egui::Event::Key {
            key, pressed: true, ..
        } => action_pour_touche(*key),
        _ => None,
    }
}

/// Un seul caractère, sinon rien (collage, IME…).
pub fn action_pour_texte(t: &str) -> Option<Action> {
    let mut it = t.chars();
    let c = match (it.next(), it.next()) {
        (Some(c), None) => c,
        _ => return None,
    };

    if c == '=' {
        return Some(Action::Evaluer);
    }
    if let Ok(ch) = Chiffre::try_from(c) {
        return Some(Action::AjouterChiffre(ch));
    }
    Operation::try_from(c).ok().map(Action::ChoisirOperation)
}

fn action_pour_touche(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::Enter => Some(Action::Evaluer),
        egui::Key::Backspace => Some(Action::Effacer),
        egui::Key::Delete => Some(Action::SupprimerChiffre),
        _ => None,
    }
}
