//! Noyau — erreurs typées
//!
//! Le réducteur est total : il n’échoue jamais.
//! Les seules erreurs possibles naissent aux frontières, quand un texte brut
//! (touche, jeton de script) doit devenir une `Action`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Ni `0-9` ni `.`.
    #[error("chiffre invalide : {0:?}")]
    ChiffreInvalide(char),

    /// Ni `+`, `-`, `*`, `/`.
    #[error("opération inconnue : {0:?}")]
    OperationInconnue(char),

    /// Type d’action inconnu du réducteur (contrat rompu côté dispatcher).
    #[error("type d’action inconnu : {0:?}")]
    ActionInconnue(String),

    /// Action qui exige une charge (chiffre / opération) reçue sans elle.
    #[error("charge manquante pour l’action {0}")]
    ChargeManquante(String),
}
