// src/noyau/lecture.rs
//
// Lecture numérique permissive (préfixe) + texte d’un flottant.

/* ------------------------ Texte -> f64 (préfixe) ------------------------ */

const INFINI: &str = "Infinity";

/// Lit le plus long préfixe numérique de `s` (blancs initiaux ignorés).
///
/// Accepte : signe optionnel, `Infinity`, chiffres avec au plus un `.`,
/// exposant `e`/`E` seulement s’il porte au moins un chiffre.
/// Le reste de la chaîne est ignoré ("12abc" -> 12).
/// `None` si aucun préfixe numérique.
pub fn lire_prefixe(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    let negatif = match b.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with(INFINI) {
        return Some(if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let debut_chiffres = i;
    let mut nb_chiffres = 0usize;

    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        nb_chiffres += 1;
    }

    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            nb_chiffres += 1;
        }
    }

    if nb_chiffres == 0 {
        return None;
    }

    // Exposant : consommé seulement s’il est complet.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    let v: f64 = s[debut_chiffres..i].parse().ok()?;
    Some(if negatif { -v } else { v })
}

/* ------------------------ f64 -> texte ------------------------ */

/// Seuils de la notation exponentielle (mêmes bornes que l’affichage d’origine).
const EXP_HAUT: f64 = 1e21;
const EXP_BAS: f64 = 1e-6;

/// Représentation décimale la plus courte qui relit la même valeur.
///
/// - `NaN`, `Infinity`, `-Infinity` en clair
/// - `-0` s’écrit `0`
/// - exponentielle (`1e+21`, `1.5e-7`) hors de [1e-6, 1e21)
pub fn nombre_vers_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            INFINI.to_string()
        } else {
            format!("-{INFINI}")
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= EXP_HAUT || a < EXP_BAS {
        let t = format!("{x:e}");
        // Rust écrit "1e21" ; on veut "1e+21".
        return match t.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => t,
        };
    }

    format!("{x}")
}
