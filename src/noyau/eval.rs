//! Noyau — évaluation d’une paire en attente
//!
//! precedent (op) courant -> texte du résultat.
//!
//! Jamais d’erreur propagée : une lecture ratée rend "" (opérande vide à l’écran),
//! une division par zéro suit l’IEEE (Infinity / NaN affichés tels quels).

use log::{debug, info};

use super::lecture::{lire_prefixe, nombre_vers_texte};
use super::reducteur::EtatCalc;

pub fn evaluer(etat: &EtatCalc) -> String {
    let precedent = etat.precedent.as_deref().and_then(lire_prefixe);
    let courant = etat.courant.as_deref().and_then(lire_prefixe);

    let (Some(a), Some(b)) = (precedent, courant) else {
        debug!(
            "évaluation impossible : precedent={:?} courant={:?}",
            etat.precedent, etat.courant
        );
        return String::new();
    };

    let Some(op) = etat.operation else {
        debug!("évaluation sans opération : {a} / {b}");
        return String::new();
    };

    let r = op.appliquer(a, b);
    if !r.is_finite() {
        info!("résultat non fini : {a} {op} {b} = {r}");
    }

    nombre_vers_texte(r)
}
