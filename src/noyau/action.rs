// src/noyau/action.rs
//
// Vocabulaire d’actions (une variante par type, charge minimale).

use std::fmt;

use super::erreur::ErreurNoyau;

/// Chiffre saisi : `0-9` ou `.` (validé à la construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    pub const ZERO: Chiffre = Chiffre('0');
    pub const POINT: Chiffre = Chiffre('.');

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurNoyau;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Chiffre(c))
        } else {
            Err(ErreurNoyau::ChiffreInvalide(c))
        }
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operation {
    pub const TOUTES: [Operation; 4] = [
        Operation::Plus,
        Operation::Moins,
        Operation::Fois,
        Operation::Division,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operation::Plus => '+',
            Operation::Moins => '-',
            Operation::Fois => '*',
            Operation::Division => '/',
        }
    }

    /// Arithmétique flottante native : /0 donne ±inf ou NaN, jamais d’erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Plus => a + b,
            Operation::Moins => a - b,
            Operation::Fois => a * b,
            Operation::Division => a / b,
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = ErreurNoyau;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Operation::TOUTES
            .into_iter()
            .find(|op| op.symbole() == c)
            .ok_or(ErreurNoyau::OperationInconnue(c))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    AjouterChiffre(Chiffre),
    SupprimerChiffre,
    ChoisirOperation(Operation),
    Effacer,
    Evaluer,
}

impl Action {
    /// Lit une action écrite en texte (scénarios de test) : `ADD_DIGIT:5`,
    /// `CHOOSE_OPERATION:+`, `DELETE_DIGIT`, `CLEAR`, `EVALUATE`.
    ///
    /// Un type inconnu est refusé tout de suite, jamais ignoré.
    pub fn depuis_texte(s: &str) -> Result<Action, ErreurNoyau> {
        let s = s.trim();
        let (genre, charge) = match s.split_once(':') {
            Some((g, c)) => (g, Some(c)),
            None => (s, None),
        };

        match genre {
            "ADD_DIGIT" => {
                let c = charge_unique(genre, charge)?;
                Ok(Action::AjouterChiffre(Chiffre::try_from(c)?))
            }
            "CHOOSE_OPERATION" => {
                let c = charge_unique(genre, charge)?;
                Ok(Action::ChoisirOperation(Operation::try_from(c)?))
            }
            "DELETE_DIGIT" => Ok(Action::SupprimerChiffre),
            "CLEAR" => Ok(Action::Effacer),
            "EVALUATE" => Ok(Action::Evaluer),
            autre => Err(ErreurNoyau::ActionInconnue(autre.to_string())),
        }
    }
}

/// La charge doit être exactement un caractère.
fn charge_unique(genre: &str, charge: Option<&str>) -> Result<char, ErreurNoyau> {
    let manquante = || ErreurNoyau::ChargeManquante(genre.to_string());

    let charge = charge.ok_or_else(manquante)?;
    let mut it = charge.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(manquante()),
    }
}
