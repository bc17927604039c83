//! Calculatrice — bibliothèque
//!
//! - noyau : machine d’états pure (actions, transition, évaluation, affichage)
//! - app   : conteneur d’état + vue egui + table clavier

pub mod app;
pub mod noyau;
