//! Tests fuzz safe : suites d’actions aléatoires, déterministes et bornées.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE action

use std::time::{Duration, Instant};

use super::{formater_operande, transition, Action, Affichage, Chiffre, EtatCalc, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const ALPHABET_CHIFFRES: &str = "0123456789.";

fn gen_action(rng: &mut Rng) -> Action {
    // chiffres majoritaires, sinon on n’atteint jamais d’états intéressants
    match rng.pick(12) {
        0..=5 => {
            let i = rng.pick(ALPHABET_CHIFFRES.len() as u32) as usize;
            let c = ALPHABET_CHIFFRES.as_bytes()[i] as char;
            Action::AjouterChiffre(Chiffre::try_from(c).expect("alphabet valide"))
        }
        6 | 7 => Action::ChoisirOperation(Operation::TOUTES[rng.pick(4) as usize]),
        8 => Action::SupprimerChiffre,
        9 | 10 => Action::Evaluer,
        _ => Action::Effacer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn au_plus_un_point(s: &Option<String>) -> bool {
    s.as_deref().is_none_or(|s| s.matches('.').count() <= 1)
}

fn check_invariants(e: &EtatCalc, derniere: Action, trace: &[Action]) {
    // Les résultats d’évaluation peuvent contenir "e-7" etc. mais jamais deux points.
    assert!(au_plus_un_point(&e.courant), "courant={:?} trace={trace:?}", e.courant);
    assert!(au_plus_un_point(&e.precedent), "precedent={:?} trace={trace:?}", e.precedent);

    // un résultat affiché (ecraser) ne se fait jamais rallonger : le chiffre suivant le remplace
    if e.ecraser {
        if let Action::AjouterChiffre(c) = derniere {
            panic!("ecraser resté vrai après {c:?} trace={trace:?}");
        }
    }

    if derniere == Action::Effacer {
        assert_eq!(e, &EtatCalc::default(), "trace={trace:?}");
    }

    // l’affichage ne panique jamais et respecte l’absence
    let a = Affichage::depuis_etat(e);
    assert_eq!(a.courant.is_none(), e.courant.is_none());
    assert_eq!(a.precedent.is_none(), e.precedent.is_none());
    let _ = a.ligne_precedente();
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_suites_actions_invariants() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    for seed in 1..=200u64 {
        budget(start, max);

        let mut rng = Rng::new(seed);
        let mut e = EtatCalc::default();
        let mut trace = Vec::with_capacity(64);

        for _ in 0..64 {
            let a = gen_action(&mut rng);
            trace.push(a);
            e = transition(e, a);
            check_invariants(&e, a, &trace);
        }
    }
}

#[test]
fn fuzz_effacer_idempotent() {
    let mut rng = Rng::new(0xC1EA2);
    let mut e = EtatCalc::default();

    for _ in 0..2_000 {
        e = transition(e, gen_action(&mut rng));

        let une = transition(e.clone(), Action::Effacer);
        let deux = transition(une.clone(), Action::Effacer);
        assert_eq!(une, deux);
        assert_eq!(une, EtatCalc::default());
    }
}

#[test]
fn fuzz_saisie_pure_concatene() {
    // Sans opérateur : courant == concaténation filtrée (zéro redondant, point unique).
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        let n = 1 + rng.pick(12) as usize;
        let mut e = EtatCalc::default();
        let mut attendu = String::new();

        for _ in 0..n {
            let i = rng.pick(ALPHABET_CHIFFRES.len() as u32) as usize;
            let c = ALPHABET_CHIFFRES.as_bytes()[i] as char;

            let bloque = (c == '0' && attendu == "0") || (c == '.' && attendu.contains('.'));
            if !bloque {
                attendu.push(c);
            }

            let chiffre = Chiffre::try_from(c).expect("alphabet valide");
            e = transition(e, Action::AjouterChiffre(chiffre));
        }

        assert_eq!(e.courant.as_deref(), Some(attendu.as_str()));
        assert!(formater_operande(e.courant.as_deref()).is_some());
    }
}
