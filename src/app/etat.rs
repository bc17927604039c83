//! src/app/etat.rs
//!
//! Conteneur d’état UI (sans vue).
//!
//! Rôle : posséder l’unique `EtatCalc` et le point de dispatch.
//!
//! Contrats :
//! - Une action = une transition complète, l’état est remplacé en bloc.
//! - Aucune logique de calcul ici : tout passe par `noyau::transition`.
//! - L’affichage est recalculé après chaque dispatch (la vue ne formate rien).

use log::debug;

use crate::noyau::{transition, Action, Affichage, EtatCalc};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    etat: EtatCalc,
    affichage: Affichage,
}

impl AppCalc {
    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    /// Point de dispatch unique (boutons + clavier).
    pub fn dispatch(&mut self, action: Action) {
        let avant = std::mem::take(&mut self.etat);
        let apres = transition(avant, action);

        debug!("{action:?} -> {apres:?}");

        self.affichage = Affichage::depuis_etat(&apres);
        self.etat = apres;
    }
}
