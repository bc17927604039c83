//! Noyau de la calculatrice (pur, sans UI)
//!
//! Organisation interne :
//! - action.rs     : vocabulaire d’actions (Chiffre, Operation, Action)
//! - reducteur.rs  : EtatCalc + transition (machine d’états)
//! - eval.rs       : calcul de la paire en attente
//! - lecture.rs    : lecture permissive (préfixe) + texte d’un flottant
//! - format.rs     : affichage groupé (1,234.5) + contrat d’affichage
//! - erreur.rs     : erreurs aux frontières (texte -> Action)

pub mod action;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod reducteur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use action::{Action, Chiffre, Operation};
pub use erreur::ErreurNoyau;
pub use eval::evaluer;
pub use format::{formater_operande, Affichage};
pub use reducteur::{transition, EtatCalc};
