// src/noyau/format.rs

use super::action::Operation;
use super::lecture::lire_prefixe;
use super::reducteur::EtatCalc;

/// Séparateur de milliers (affichage en-US).
const SEPARATEUR_MILLIERS: char = ',';

/* ------------------------ Partie entière ------------------------ */

/// Groupe une suite de chiffres par trois : "1234567" -> "1,234,567".
fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR_MILLIERS);
        }
        out.push(c);
    }
    out
}

/// Partie entière affichée : signe conservé, zéros de tête retirés,
/// vide -> "0", Infinity -> "∞".
/// Forme exponentielle ("1e+21", "1e-7") : lue, arrondie à l’entier, puis développée
/// et groupée. Texte illisible (NaN…) rendu tel quel.
fn formater_entier(entier: &str) -> String {
    let (signe, corps) = match entier.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", entier),
    };

    if corps == "Infinity" {
        return format!("{signe}∞");
    }
    if !corps.bytes().all(|b| b.is_ascii_digit()) {
        return match lire_prefixe(corps) {
            Some(v) if v.is_finite() => {
                let arrondi = v.abs().round();
                if arrondi == 0.0 {
                    "0".to_string()
                } else {
                    format!("{signe}{}", grouper_milliers(&format!("{arrondi:.0}")))
                }
            }
            _ => entier.to_string(),
        };
    }

    let significatif = corps.trim_start_matches('0');
    if significatif.is_empty() {
        return "0".to_string();
    }

    format!("{signe}{}", grouper_milliers(significatif))
}

/* ------------------------ Opérande ------------------------ */

/// Opérande -> texte affiché.
/// - absent -> absent
/// - partie entière groupée ("1234" -> "1,234")
/// - partie décimale recollée telle quelle (jamais groupée, jamais arrondie)
pub fn formater_operande(operande: Option<&str>) -> Option<String> {
    let operande = operande?;

    // évaluation ratée : opérande vide, écran vide
    if operande.is_empty() {
        return Some(String::new());
    }

    Some(match operande.split_once('.') {
        Some((entier, decimales)) => format!("{}.{decimales}", formater_entier(entier)),
        None => formater_entier(operande),
    })
}

/* ------------------------ Contrat d’affichage ------------------------ */

/// Ce que la vue consomme après chaque action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub precedent: Option<String>,
    pub operation: Option<Operation>,
    pub courant: Option<String>,
}

impl Affichage {
    pub fn depuis_etat(etat: &EtatCalc) -> Self {
        Self {
            precedent: formater_operande(etat.precedent.as_deref()),
            operation: etat.operation,
            courant: formater_operande(etat.courant.as_deref()),
        }
    }

    /// Ligne haute : "opérande-précédent opération".
    pub fn ligne_precedente(&self) -> String {
        let p = self.precedent.as_deref().unwrap_or("");
        match self.operation {
            Some(op) => format!("{p} {op}"),
            None => p.to_string(),
        }
    }

    /// Ligne basse : opérande courant (vide si absent).
    pub fn ligne_courante(&self) -> &str {
        self.courant.as_deref().unwrap_or("")
    }
}
