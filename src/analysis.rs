//! The search driver: sweeps wheel orders, reflectors, and ring settings,
//! runs a Bombe per cell, and ranks the survivors by fitness.

pub mod fitness;

use std::ops::Deref;

use itertools::iproduct;
use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::bombe::Bombe;
use crate::enigma::{
    EnigmaError, EnigmaKey, EnigmaMachine, Plugboard, ReflectorId, Rotor, RotorId,
};
use crate::menu::{self, Menu};
use fitness::FitnessFunction;

#[derive(Debug, Error)]
pub enum CrackError {
    #[error("no crib admits a placement whose menu contains a cycle")]
    NoUsableMenu,
    #[error("no configuration recovered")]
    NoSurvivors,
    #[error("invalid machine configuration: {0}")]
    Config(#[from] EnigmaError),
}

/// Which wheels the search may draw a wheel order from.
pub enum AnalysisRotors {
    Three,
    Five,
    Eight,
}

impl AnalysisRotors {
    fn available(&self) -> &'static [RotorId] {
        match self {
            AnalysisRotors::Three => &[RotorId::I, RotorId::II, RotorId::III],
            AnalysisRotors::Five => &[
                RotorId::I,
                RotorId::II,
                RotorId::III,
                RotorId::IV,
                RotorId::V,
            ],
            AnalysisRotors::Eight => &[
                RotorId::I,
                RotorId::II,
                RotorId::III,
                RotorId::IV,
                RotorId::V,
                RotorId::VI,
                RotorId::VII,
                RotorId::VIII,
            ],
        }
    }
}

/// The cells the driver will sweep. Fields are public so callers can pin
/// any axis to a known value.
pub struct SearchSpace {
    /// Wheel orders, left to right. Repeated wheels are rejected at
    /// machine construction.
    pub wheel_orders: Vec<[RotorId; 3]>,
    pub reflectors: Vec<ReflectorId>,
    /// Ring settings, fastest rotor first.
    pub ring_settings: Vec<[u8; 3]>,
}

impl SearchSpace {
    /// The full space for a wheel pool: every distinct order, reflector B,
    /// every ring setting. Five wheels gives the classic 60 x 17,576 cells.
    pub fn full(pool: AnalysisRotors) -> Self {
        let available = pool.available();

        let wheel_orders = iproduct!(available, available, available)
            .map(|(&a, &b, &c)| [a, b, c])
            .filter(|[a, b, c]| a != b && a != c && b != c)
            .collect();

        let ring_settings = iproduct!(0..26u8, 0..26u8, 0..26u8)
            .map(|(r0, r1, r2)| [r0, r1, r2])
            .collect();

        Self {
            wheel_orders,
            reflectors: vec![ReflectorId::B],
            ring_settings,
        }
    }
}

pub struct ScoredEnigmaKey {
    key: EnigmaKey,
    score: f32,
}

impl Deref for ScoredEnigmaKey {
    type Target = EnigmaKey;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

impl PartialEq for ScoredEnigmaKey {
    fn eq(&self, other: &Self) -> bool {
        self.score.eq(&other.score)
    }
}

impl PartialOrd for ScoredEnigmaKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.score.partial_cmp(&other.score)
    }
}

impl ScoredEnigmaKey {
    pub fn key(&self) -> EnigmaKey {
        self.key
    }

    pub fn score(&self) -> f32 {
        self.score
    }
}

/// A recovered message and the machine state that produced it.
pub struct Recovery {
    pub plaintext: String,
    pub key: EnigmaKey,
    pub score: f32,
}

/// Builds menus for every crib placement and keeps the one with the most
/// cycle paths; more paths means more constraints per Bombe trial.
///
/// Cribs that do not fit or admit no valid placement are skipped with a
/// warning; placements whose menu has no cycle are useless to the Bombe and
/// are dropped. Ties go to the earliest crib and placement.
pub fn choose_menu(ciphertext: &str, cribs: &[&str]) -> Result<(Menu, Vec<Vec<u8>>), CrackError> {
    let mut menus = Vec::new();

    for &crib in cribs {
        if crib.is_empty() || crib.len() > ciphertext.len() {
            warn!("crib {:?} does not fit the ciphertext, skipping", crib);
            continue;
        }

        let positions = menu::find_crib_positions(crib, ciphertext);
        if positions.is_empty() {
            warn!("crib {:?} admits no valid placement, skipping", crib);
            continue;
        }

        for position in positions {
            let candidate = Menu::new(crib, ciphertext, position);
            let paths = menu::find_paths(&candidate);
            if paths.is_empty() {
                debug!("menu for crib {:?} at {} has no cycles", crib, position);
                continue;
            }
            menus.push((candidate, paths));
        }
    }

    // Stable, so earlier placements win ties.
    menus.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    menus.into_iter().next().ok_or(CrackError::NoUsableMenu)
}

/// Recovers the most English-like decryption of `ciphertext` from the given
/// cribs, sweeping `space` with one Bombe per cell.
///
/// The winner is the highest-scoring survivor; equal scores are broken by
/// the key's canonical string, so the result does not depend on worker
/// scheduling.
pub fn recover(
    ciphertext: &str,
    cribs: &[&str],
    space: &SearchSpace,
    f: &(impl FitnessFunction + Sync),
) -> Result<Recovery, CrackError> {
    let (chosen, paths) = choose_menu(ciphertext, cribs)?;
    debug!(
        "menu at ciphertext offset {} with {} paths: {}",
        chosen.offset(),
        paths.len(),
        paths
            .iter()
            .map(|p| menu::path_string(p))
            .collect::<Vec<_>>()
            .join(" ")
    );

    // Collecting ends up being faster as the parallel iterator doesn't need
    // to syncronise access.
    let cells: Vec<_> = iproduct!(
        space.reflectors.iter().copied(),
        space.wheel_orders.iter().copied(),
        space.ring_settings.iter().copied()
    )
    .collect();
    debug!("sweeping {} search cells", cells.len());

    let mut survivors: Vec<ScoredEnigmaKey> = cells
        .into_par_iter() // more cores more better!
        .flat_map(|(reflector, order, rings)| {
            score_cell(&chosen, &paths, ciphertext, reflector, order, rings, f)
        })
        .collect();

    survivors.sort_unstable_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap()
            .then_with(|| a.key.to_string().cmp(&b.key.to_string()))
    });

    let best = survivors.into_iter().next().ok_or(CrackError::NoSurvivors)?;

    let mut machine = EnigmaMachine::new(best.key)?;
    let plaintext = machine.encrypt(ciphertext);

    Ok(Recovery {
        plaintext,
        key: best.key,
        score: best.score,
    })
}

/// Runs one cell's Bombe and scores every (plugboard, start) survivor.
fn score_cell(
    menu: &Menu,
    paths: &[Vec<u8>],
    ciphertext: &str,
    reflector: ReflectorId,
    order: [RotorId; 3],
    rings: [u8; 3],
    f: &(impl FitnessFunction + Sync),
) -> Vec<ScoredEnigmaKey> {
    let template = EnigmaKey::new(
        Rotor::new(order[0], 0, 0),
        Rotor::new(order[1], 0, 0),
        Rotor::new(order[2], 0, 0),
        reflector,
        Plugboard::empty(),
    );
    let machine = match EnigmaMachine::new(template) {
        Ok(machine) => machine,
        Err(e) => {
            warn!("skipping cell {:?}/{:?}: {}", order, reflector, e);
            return Vec::new();
        }
    };

    let possibilities = Bombe::new(machine, rings).run(menu, paths);
    if possibilities.is_empty() {
        return Vec::new();
    }

    let mut scored = Vec::new();
    for (pairs, starts) in possibilities {
        let plugboard = match Plugboard::from_pairs(&pairs) {
            Ok(plugboard) => plugboard,
            Err(e) => {
                warn!("dropping inconsistent plugboard deduction: {}", e);
                continue;
            }
        };

        for start in starts {
            let mut candidate = machine;
            candidate.set_plugboard(plugboard);
            candidate.configure_rotors(rings, start);

            // Rewind to the state immediately before the first message
            // press; the Bombe's starts describe the state just before the
            // crib.
            for _ in 0..menu.offset() {
                candidate.unstep();
            }

            let key = candidate.key();
            let decryption = candidate.encrypt(ciphertext);
            scored.push(ScoredEnigmaKey {
                key,
                score: f.score(&decryption),
            });
        }
    }

    debug!(
        "cell {:?}/{:?}/{:?} produced {} survivors",
        order,
        reflector,
        rings,
        scored.len()
    );
    scored
}
