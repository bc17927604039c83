//! Noyau — machine d’états de l’expression
//!
//! Contrats :
//! - `EtatCalc` est une valeur : chaque action produit un nouvel état, l’ancien est consommé.
//! - `transition` est totale : les cinq actions sont traitées, aucune ne panique.
//! - Les entrées redondantes (zéro de tête, second point, opérandes manquants)
//!   sont des transitions neutres : l’état rendu est égal à l’état reçu.
//! - `EtatCalc::default()` est l’état vide canonique, atteint seulement par `Effacer`.

use super::action::{Action, Chiffre, Operation};
use super::eval::evaluer;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalc {
    /// Opérande gauche d’une opération en attente.
    pub precedent: Option<String>,
    /// Opérande en cours de saisie / affiché.
    pub courant: Option<String>,
    pub operation: Option<Operation>,
    /// Après `Evaluer` : le prochain chiffre remplace `courant` au lieu de s’y ajouter.
    pub ecraser: bool,
}

#[cfg(test)]
impl EtatCalc {
    /// Replie une suite d’actions depuis `self` (scénarios de test).
    pub fn appliquer_tout<I>(self, actions: I) -> EtatCalc
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().fold(self, transition)
    }
}

pub fn transition(etat: EtatCalc, action: Action) -> EtatCalc {
    match action {
        Action::AjouterChiffre(c) => ajouter_chiffre(etat, c),
        Action::SupprimerChiffre => supprimer_chiffre(etat),
        Action::ChoisirOperation(op) => choisir_operation(etat, op),
        Action::Effacer => EtatCalc::default(),
        Action::Evaluer => evaluer_etat(etat),
    }
}

fn ajouter_chiffre(etat: EtatCalc, c: Chiffre) -> EtatCalc {
    if etat.ecraser {
        return EtatCalc {
            courant: Some(c.to_string()),
            ecraser: false,
            ..etat
        };
    }

    let courant = etat.courant.as_deref();

    // pas de zéros de tête redondants
    if c == Chiffre::ZERO && courant == Some("0") {
        return etat;
    }
    // au plus un point décimal
    if c == Chiffre::POINT && courant.is_some_and(|s| s.contains('.')) {
        return etat;
    }

    let mut suivant = etat.courant.clone().unwrap_or_default();
    suivant.push(c.as_char());

    EtatCalc {
        courant: Some(suivant),
        ..etat
    }
}

fn supprimer_chiffre(etat: EtatCalc) -> EtatCalc {
    // Juste après "=", DEL jette le résultat plutôt que d’en retirer un caractère.
    if etat.ecraser {
        return EtatCalc {
            courant: None,
            ecraser: false,
            ..etat
        };
    }

    let Some(courant) = etat.courant.as_deref() else {
        return etat;
    };

    let suivant = if courant.chars().count() == 1 {
        None
    } else {
        let mut s = courant.to_string();
        s.pop();
        Some(s)
    };

    EtatCalc {
        courant: suivant,
        ..etat
    }
}

fn choisir_operation(etat: EtatCalc, op: Operation) -> EtatCalc {
    match (etat.precedent.is_some(), etat.courant.is_some()) {
        // rien sur quoi opérer
        (false, false) => etat,

        // opérande déjà engagé : on change seulement d’avis sur l’opérateur
        (true, false) => EtatCalc {
            operation: Some(op),
            ..etat
        },

        // premier opérande saisi : on l’engage
        (false, true) => EtatCalc {
            precedent: etat.courant,
            courant: None,
            operation: Some(op),
            ..etat
        },

        // opération en attente complète : calcul enchaîné
        (true, true) => EtatCalc {
            precedent: Some(evaluer(&etat)),
            courant: None,
            operation: Some(op),
            ..etat
        },
    }
}

fn evaluer_etat(etat: EtatCalc) -> EtatCalc {
    if etat.operation.is_none() || etat.precedent.is_none() || etat.courant.is_none() {
        return etat;
    }

    EtatCalc {
        courant: Some(evaluer(&etat)),
        precedent: None,
        operation: None,
        ecraser: true,
    }
}
